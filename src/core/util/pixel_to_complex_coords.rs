use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;

/// Complex-plane units covered by the full frame width at zoom 1.
pub const BASE_SPAN: f64 = 4.0;

/// Maps a pixel to the complex plane for the given view.
///
/// The frame width always spans `BASE_SPAN / zoom` units and the height uses
/// the same per-pixel scale, so the plane keeps the screen's aspect ratio.
/// The frame center lands exactly on the view center.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, width: u32, height: u32, view: &ViewState) -> Complex {
    let scale = BASE_SPAN / (view.zoom * width as f64);
    let half_width = width as f64 / 2.0;
    let half_height = height as f64 / 2.0;

    Complex {
        real: view.center_real + (pixel.x as f64 - half_width) * scale,
        imag: view.center_imag + (pixel.y as f64 - half_height) * scale,
    }
}

/// Converts a pointer movement in pixels into a movement on the complex plane.
///
/// Each axis is scaled by its own frame dimension.
#[must_use]
pub fn pixel_delta_to_complex_delta(dx: i32, dy: i32, width: u32, height: u32, zoom: f64) -> Complex {
    let span = BASE_SPAN / zoom;

    Complex {
        real: dx as f64 * span / width as f64,
        imag: dy as f64 * span / height as f64,
    }
}
