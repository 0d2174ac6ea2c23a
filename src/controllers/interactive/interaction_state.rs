use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging { last_pointer: Point },
}

impl InteractionState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub fn last_pointer(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { last_pointer } => Some(*last_pointer),
        }
    }
}
