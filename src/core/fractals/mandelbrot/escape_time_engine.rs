use crate::core::actions::render_frame::ports::pixel_engine::PixelEngine;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::algorithm::escape_time;
use crate::core::fractals::mandelbrot::colour_map::{MandelbrotColourMap, MandelbrotColourMapKind};
use crate::core::fractals::mandelbrot::colour_maps::factory::mandelbrot_colour_map_factory;

/// Escape-time iteration paired with the palette that colours its result.
#[derive(Debug)]
pub struct EscapeTimeEngine {
    colour_map: Box<dyn MandelbrotColourMap>,
}

impl EscapeTimeEngine {
    #[must_use]
    pub fn new(kind: MandelbrotColourMapKind) -> Self {
        Self {
            colour_map: mandelbrot_colour_map_factory(kind),
        }
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKind {
        self.colour_map.kind()
    }

    /// Returns the escape count for `c` and its colour.
    #[must_use]
    pub fn iterate(&self, c: Complex, max_iterations: u32) -> (u32, Colour) {
        let escape = escape_time(c, max_iterations);

        (escape.iterations, self.colour_map.map(escape))
    }
}

impl Default for EscapeTimeEngine {
    fn default() -> Self {
        Self::new(MandelbrotColourMapKind::default())
    }
}

impl PixelEngine for EscapeTimeEngine {
    #[inline]
    fn shade(&self, c: Complex, max_iterations: u32) -> Colour {
        self.iterate(c, max_iterations).1
    }
}
