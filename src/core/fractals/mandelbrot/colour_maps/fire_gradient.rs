use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::EscapeTime;
use crate::core::fractals::mandelbrot::colour_map::{MandelbrotColourMap, MandelbrotColourMapKind};

/// Black → red → orange → yellow → white, one quarter of the range each.
#[derive(Debug, Default)]
pub struct MandelbrotFireGradient;

impl MandelbrotColourMap for MandelbrotFireGradient {
    fn map(&self, escape: EscapeTime) -> Colour {
        if escape.is_in_set() {
            return Colour::BLACK;
        }

        let t = escape.fraction();

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Colour { r, g, b }
    }

    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::FireGradient
    }
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}
