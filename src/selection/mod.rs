//! Selection geometry and the rectangle-manipulation engine.
//!
//! All coordinates are `f64` in the host surface's y-up space: the origin is
//! the bottom-left corner and "top" means a larger `y`.

mod engine;
mod handles;
mod transform;

pub use engine::SelectionEngine;
pub use handles::{control_point_for_handle, handle_box, hit_test};
pub use transform::{create_rect, move_rect, resize_rect, update_interaction};

use serde::{Deserialize, Serialize};

/// Hard floor for width and height, enforced on every mutation.
pub const MIN_SELECTION_SIZE: f64 = 20.0;

/// Side of the square hit box drawn for each handle.
pub const HANDLE_SIZE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle. This is also the persisted shape of an area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Bounding box of two points, whatever their order.
    pub fn normalize(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    pub fn contains_rect(&self, other: &SelectionRect) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Overlap of two rectangles; zero-sized at the clamped corner when disjoint.
    pub fn intersection(&self, other: &SelectionRect) -> SelectionRect {
        let x = self.min_x().max(other.min_x());
        let y = self.min_y().max(other.min_y());
        let right = self.max_x().min(other.max_x());
        let top = self.max_y().min(other.max_y());
        SelectionRect::new(x, y, (right - x).max(0.0), (top - y).max(0.0))
    }

    /// Grows the rectangle by `amount` on every side (shrinks when negative).
    pub fn inflate(&self, amount: f64) -> SelectionRect {
        SelectionRect::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Rectangle of `size` centered in `self`.
    pub fn centered(&self, size: Size) -> SelectionRect {
        SelectionRect::new(
            self.x + (self.width - size.width) / 2.0,
            self.y + (self.height - size.height) / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn meets_minimum(&self) -> bool {
        self.width >= MIN_SELECTION_SIZE && self.height >= MIN_SELECTION_SIZE
    }

    /// Raises width/height to the floor, growing from the origin, then pulls
    /// the origin back so the rectangle stays inside `bounds`.
    pub fn with_minimum_size(&self, bounds: &SelectionRect) -> SelectionRect {
        let width = self.width.max(MIN_SELECTION_SIZE);
        let height = self.height.max(MIN_SELECTION_SIZE);
        let x = self.x.min(bounds.max_x() - width).max(bounds.min_x());
        let y = self.y.min(bounds.max_y() - height).max(bounds.min_y());
        SelectionRect::new(x, y, width, height)
    }
}

/// Edge or corner of the selection a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Handle {
    #[default]
    None,
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Handle {
    /// Grabbable handles, in hit-test priority order.
    pub const GRABBABLE: [Handle; 8] = [
        Handle::TopLeft,
        Handle::Top,
        Handle::TopRight,
        Handle::Right,
        Handle::BottomRight,
        Handle::Bottom,
        Handle::BottomLeft,
        Handle::Left,
    ];

    pub fn is_none(&self) -> bool {
        matches!(self, Handle::None)
    }
}

/// Current pointer interaction. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    Idle,
    Creating,
    Moving,
    Resizing(Handle),
}

impl DragMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragMode::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_orders_corners() {
        let rect = SelectionRect::normalize(Point::new(300.0, 50.0), Point::new(100.0, 250.0));
        assert_eq!(rect, SelectionRect::new(100.0, 50.0, 200.0, 200.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = SelectionRect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(30.0, 30.0)));
        assert!(!rect.contains(Point::new(30.5, 30.0)));
    }

    #[test]
    fn test_intersection_of_disjoint_is_empty() {
        let a = SelectionRect::new(0.0, 0.0, 10.0, 10.0);
        let b = SelectionRect::new(20.0, 20.0, 10.0, 10.0);
        let overlap = a.intersection(&b);
        assert_eq!(overlap.width, 0.0);
        assert_eq!(overlap.height, 0.0);
    }

    #[test]
    fn test_centered() {
        let host = SelectionRect::new(0.0, 0.0, 1000.0, 800.0);
        let rect = host.centered(Size::new(600.0, 450.0));
        assert_eq!(rect, SelectionRect::new(200.0, 175.0, 600.0, 450.0));
    }

    #[test]
    fn test_with_minimum_size_stays_in_bounds() {
        let bounds = SelectionRect::new(0.0, 0.0, 100.0, 100.0);
        let tiny = SelectionRect::new(95.0, 98.0, 3.0, 1.0);
        let grown = tiny.with_minimum_size(&bounds);
        assert!(grown.meets_minimum());
        assert!(bounds.contains_rect(&grown));
        assert_eq!(grown, SelectionRect::new(80.0, 80.0, 20.0, 20.0));
    }

    #[test]
    fn test_inflate_for_outline() {
        let rect = SelectionRect::new(100.0, 100.0, 200.0, 150.0).inflate(5.0);
        assert_eq!(rect, SelectionRect::new(95.0, 95.0, 210.0, 160.0));
    }
}
