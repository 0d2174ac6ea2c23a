use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;

pub trait PixelEngine: Sync {
    fn shade(&self, c: Complex, max_iterations: u32) -> Colour;
}
