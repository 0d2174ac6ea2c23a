pub mod colour;
pub mod complex;
pub mod frame_buffer;
pub mod pixel_format;
pub mod point;
pub mod view_state;
