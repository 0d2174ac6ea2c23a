use crate::core::data::frame_buffer::FrameBuffer;

/// Receives each completed frame. Never sees a partially rendered buffer.
pub trait FramePresenterPort {
    fn present(&mut self, frame: &FrameBuffer);
}
