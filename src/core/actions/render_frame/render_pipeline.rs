use std::fmt;
use std::time::{Duration, Instant};

use crate::core::actions::render_frame::ports::pixel_engine::PixelEngine;
use crate::core::actions::render_frame::render_frame::{
    render_frame_parallel_rayon, render_frame_serial,
};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::escape_time_engine::EscapeTimeEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    Serial,
    #[default]
    ParallelRows,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial => f.write_str("serial"),
            Self::ParallelRows => f.write_str("parallel rows"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub width: u32,
    pub height: u32,
    pub duration: Duration,
}

/// Renders whole frames with one engine and one strategy.
#[derive(Debug)]
pub struct RenderPipeline<E = EscapeTimeEngine> {
    engine: E,
    mode: RenderMode,
}

impl Default for RenderPipeline<EscapeTimeEngine> {
    fn default() -> Self {
        Self::new(MandelbrotColourMapKind::default(), RenderMode::default())
    }
}

impl RenderPipeline<EscapeTimeEngine> {
    #[must_use]
    pub fn new(colour_map: MandelbrotColourMapKind, mode: RenderMode) -> Self {
        Self::with_engine(EscapeTimeEngine::new(colour_map), mode)
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKind {
        self.engine.colour_map_kind()
    }

    pub fn set_colour_map(&mut self, kind: MandelbrotColourMapKind) {
        self.engine = EscapeTimeEngine::new(kind);
    }
}

impl<E: PixelEngine> RenderPipeline<E> {
    #[must_use]
    pub fn with_engine(engine: E, mode: RenderMode) -> Self {
        Self { engine, mode }
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Overwrites every pixel of `buffer` with the frame for `view`.
    ///
    /// `view` is taken by value so the whole frame sees one snapshot.
    pub fn render(&self, buffer: &mut FrameBuffer, view: ViewState) -> RenderStats {
        let start = Instant::now();

        match self.mode {
            RenderMode::Serial => render_frame_serial(buffer, &view, &self.engine),
            RenderMode::ParallelRows => render_frame_parallel_rayon(buffer, &view, &self.engine),
        }

        RenderStats {
            width: buffer.width(),
            height: buffer.height(),
            duration: start.elapsed(),
        }
    }
}
