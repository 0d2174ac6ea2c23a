use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::EscapeTime;
use crate::core::fractals::mandelbrot::colour_map::{MandelbrotColourMap, MandelbrotColourMapKind};

/// Smooth polynomial gradient from deep blue through white-ish highlights.
#[derive(Debug, Default)]
pub struct MandelbrotBlueWhiteGradient;

impl MandelbrotColourMap for MandelbrotBlueWhiteGradient {
    fn map(&self, escape: EscapeTime) -> Colour {
        if escape.is_in_set() {
            return Colour::BLACK;
        }

        let t = escape.fraction();
        let u = 1.0 - t;

        Colour {
            r: (9.0 * u * t * t * t * 255.0) as u8,
            g: (15.0 * u * u * t * t * 255.0) as u8,
            b: (8.5 * u * u * u * t * 255.0) as u8,
        }
    }

    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::BlueWhiteGradient
    }
}

impl MandelbrotBlueWhiteGradient {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}
