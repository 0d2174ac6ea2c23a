use std::error::Error;
use std::fmt;

use crate::core::actions::render_frame::render_pipeline::RenderMode;
use crate::core::data::frame_buffer::FrameBufferError;
use crate::core::data::view_state::{ViewState, ViewStateError};
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMapKind;

pub const DEFAULT_WIDTH: i32 = 800;
pub const DEFAULT_HEIGHT: i32 = 600;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewerConfigError {
    FrameBuffer(FrameBufferError),
    ViewState(ViewStateError),
}

impl fmt::Display for ViewerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameBuffer(err) => write!(f, "invalid frame size: {}", err),
            Self::ViewState(err) => write!(f, "invalid initial view: {}", err),
        }
    }
}

impl Error for ViewerConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FrameBuffer(err) => Some(err),
            Self::ViewState(err) => Some(err),
        }
    }
}

impl From<FrameBufferError> for ViewerConfigError {
    fn from(err: FrameBufferError) -> Self {
        Self::FrameBuffer(err)
    }
}

impl From<ViewStateError> for ViewerConfigError {
    fn from(err: ViewStateError) -> Self {
        Self::ViewState(err)
    }
}

/// Startup settings for a viewer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewerConfig {
    pub width: i32,
    pub height: i32,
    pub initial_view: ViewState,
    pub colour_map: MandelbrotColourMapKind,
    pub render_mode: RenderMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            initial_view: ViewState::default(),
            colour_map: MandelbrotColourMapKind::default(),
            render_mode: RenderMode::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ViewerConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(FrameBufferError::InvalidDimension {
                width: self.width,
                height: self.height,
            }
            .into());
        }

        self.initial_view.validate()?;
        Ok(())
    }
}
