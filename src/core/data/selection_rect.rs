use crate::core::data::point::Point;

/// A square in screen space, `size` pixels on each side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSquare {
    pub origin: Point,
    pub size: i32,
}

/// A mouse drag from `start` to `end`. `active` while the button is held.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SelectionRect {
    pub start: Point,
    pub end: Point,
    pub active: bool,
}

impl SelectionRect {
    #[must_use]
    pub fn begin(at: Point) -> Self {
        Self {
            start: at,
            end: at,
            active: true,
        }
    }

    /// Clamps the drag to a square of side `min(|dx|, |dy|)`.
    ///
    /// On an axis where the drag went backwards the square extends backwards
    /// from `start`. Returns `None` when the square would be empty.
    #[must_use]
    pub fn to_square(&self) -> Option<PixelSquare> {
        let dx = i64::from(self.end.x) - i64::from(self.start.x);
        let dy = i64::from(self.end.y) - i64::from(self.start.y);
        let size = dx.abs().min(dy.abs());

        if size == 0 {
            return None;
        }

        let size = i32::try_from(size).ok()?;
        let x = if dx < 0 { self.start.x - size } else { self.start.x };
        let y = if dy < 0 { self.start.y - size } else { self.start.y };

        Some(PixelSquare {
            origin: Point { x, y },
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(from: (i32, i32), to: (i32, i32)) -> SelectionRect {
        SelectionRect {
            start: Point { x: from.0, y: from.1 },
            end: Point { x: to.0, y: to.1 },
            active: true,
        }
    }

    #[test]
    fn test_begin_starts_a_zero_length_drag() {
        let selection = SelectionRect::begin(Point { x: 4, y: 9 });

        assert!(selection.active);
        assert_eq!(selection.start, selection.end);
        assert_eq!(selection.to_square(), None);
    }

    #[test]
    fn test_forward_drag_is_anchored_at_start() {
        let square = drag((100, 100), (200, 150)).to_square().unwrap();

        assert_eq!(square.origin, Point { x: 100, y: 100 });
        assert_eq!(square.size, 50);
    }

    #[test]
    fn test_backward_drag_is_anchored_behind_start() {
        let square = drag((200, 200), (120, 170)).to_square().unwrap();

        assert_eq!(square.origin, Point { x: 170, y: 170 });
        assert_eq!(square.size, 30);
    }

    #[test]
    fn test_mixed_direction_drag() {
        let square = drag((50, 50), (90, 10)).to_square().unwrap();

        assert_eq!(square.origin, Point { x: 50, y: 10 });
        assert_eq!(square.size, 40);
    }

    #[test]
    fn test_drag_along_one_axis_is_degenerate() {
        assert_eq!(drag((10, 10), (80, 10)).to_square(), None);
        assert_eq!(drag((10, 10), (10, 80)).to_square(), None);
    }
}
