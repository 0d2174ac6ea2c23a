#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`, as (dx, dy). Saturates at the `i32` range.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> (i32, i32) {
        (self.x.saturating_sub(origin.x), self.y.saturating_sub(origin.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_from() {
        let origin = Point::new(100, 100);

        assert_eq!(Point::new(110, 95).delta_from(origin), (10, -5));
        assert_eq!(origin.delta_from(origin), (0, 0));
    }

    #[test]
    fn test_delta_from_extreme_coordinates_saturates() {
        let far_right = Point::new(i32::MAX, 0);
        let far_left = Point::new(i32::MIN, 0);

        assert_eq!(far_right.delta_from(far_left), (i32::MAX, 0));
        assert_eq!(far_left.delta_from(far_right), (i32::MIN, 0));
    }
}
