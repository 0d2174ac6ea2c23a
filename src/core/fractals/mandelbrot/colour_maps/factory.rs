use crate::core::fractals::mandelbrot::colour_map::{MandelbrotColourMap, MandelbrotColourMapKind};
use crate::core::fractals::mandelbrot::colour_maps::blue_white_gradient::MandelbrotBlueWhiteGradient;
use crate::core::fractals::mandelbrot::colour_maps::fire_gradient::MandelbrotFireGradient;

#[must_use]
pub fn mandelbrot_colour_map_factory(kind: MandelbrotColourMapKind) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKind::FireGradient => Box::new(MandelbrotFireGradient::new()),
        MandelbrotColourMapKind::BlueWhiteGradient => Box::new(MandelbrotBlueWhiteGradient::new()),
    }
}
