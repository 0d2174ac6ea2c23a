use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WheelDirection {
    /// Away from the user; zooms in.
    Forward,
    /// Towards the user; zooms out.
    Back,
}

/// Input delivered by the windowing layer, already in frame pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    Wheel(WheelDirection),
    Resize { width: i32, height: i32 },
}
