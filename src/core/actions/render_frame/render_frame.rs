use rayon::prelude::*;

use crate::core::actions::render_frame::ports::pixel_engine::PixelEngine;
use crate::core::data::colour::Colour;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Renders every pixel on the calling thread, top-left to bottom-right.
pub fn render_frame_serial<E: PixelEngine>(buffer: &mut FrameBuffer, view: &ViewState, engine: &E) {
    let width = buffer.width();
    let height = buffer.height();

    for y in 0..height {
        for x in 0..width {
            let c = pixel_to_complex_coords(Point::new(x as i32, y as i32), width, height, view);
            buffer.set(x, y, engine.shade(c, view.max_iterations));
        }
    }
}

/// Renders rows in parallel on rayon's pool.
///
/// Each task owns exactly one row slice, so no two workers touch the same
/// pixel. Returns once every row is written.
pub fn render_frame_parallel_rayon<E: PixelEngine>(
    buffer: &mut FrameBuffer,
    view: &ViewState,
    engine: &E,
) {
    let width = buffer.width();
    let height = buffer.height();

    buffer
        .rows_mut()
        .enumerate()
        .for_each(|(y, row)| render_row(row, y as u32, width, height, view, engine));
}

fn render_row<E: PixelEngine>(
    row: &mut [Colour],
    y: u32,
    width: u32,
    height: u32,
    view: &ViewState,
    engine: &E,
) {
    for (x, pixel) in row.iter_mut().enumerate() {
        let c = pixel_to_complex_coords(Point::new(x as i32, y as i32), width, height, view);
        *pixel = engine.shade(c, view.max_iterations);
    }
}
