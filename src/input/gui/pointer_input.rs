use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::controllers::interactive::events::{ViewerEvent, WheelDirection};
use crate::core::data::point::Point;

/// What a window input asks of the viewer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuiAction {
    Viewer(ViewerEvent),
    ResetView,
}

/// Turns raw winit mouse and keyboard input into viewer events.
///
/// winit reports button presses without a position, so the last cursor
/// position is tracked here.
#[derive(Debug, Default)]
pub struct PointerInput {
    cursor: Point,
}

impl PointerInput {
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> GuiAction {
        self.cursor = Point::new(position.x.round() as i32, position.y.round() as i32);
        GuiAction::Viewer(ViewerEvent::PointerMove(self.cursor))
    }

    pub fn mouse_button(&self, button: MouseButton, state: ElementState) -> Option<GuiAction> {
        if button != MouseButton::Left {
            return None;
        }

        let event = match state {
            ElementState::Pressed => ViewerEvent::PointerDown(self.cursor),
            ElementState::Released => ViewerEvent::PointerUp,
        };

        Some(GuiAction::Viewer(event))
    }

    pub fn mouse_wheel(&self, delta: MouseScrollDelta) -> Option<GuiAction> {
        let y = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        let direction = if y > 0.0 {
            WheelDirection::Forward
        } else if y < 0.0 {
            WheelDirection::Back
        } else {
            return None;
        };

        Some(GuiAction::Viewer(ViewerEvent::Wheel(direction)))
    }

    pub fn key(&self, key_code: KeyCode, state: ElementState) -> Option<GuiAction> {
        match key_code {
            KeyCode::KeyR if state == ElementState::Pressed => Some(GuiAction::ResetView),
            _ => None,
        }
    }
}

/// Window sizes arrive as `u32`; the viewer works in `i32`.
#[must_use]
pub fn resize_action(width: u32, height: u32) -> GuiAction {
    GuiAction::Viewer(ViewerEvent::Resize {
        width: i32::try_from(width).unwrap_or(i32::MAX),
        height: i32::try_from(height).unwrap_or(i32::MAX),
    })
}
