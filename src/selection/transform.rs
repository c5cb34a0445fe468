//! Pure rectangle transforms driven by pointer movement.

use super::{DragMode, Handle, Point, SelectionRect, MIN_SELECTION_SIZE};

type ResizeFn = fn(SelectionRect, f64, f64) -> SelectionRect;

/// One transform per grabbable handle. Deltas are incremental (current minus
/// previous pointer location), so they accumulate over a drag.
const RESIZE_TRANSFORMS: [(Handle, ResizeFn); 8] = [
    (Handle::TopLeft, resize_top_left),
    (Handle::Top, resize_top),
    (Handle::TopRight, resize_top_right),
    (Handle::Right, resize_right),
    (Handle::BottomRight, resize_bottom_right),
    (Handle::Bottom, resize_bottom),
    (Handle::BottomLeft, resize_bottom_left),
    (Handle::Left, resize_left),
];

fn floor(value: f64) -> f64 {
    value.max(MIN_SELECTION_SIZE)
}

// Origin moves with the pointer but never past the point where the opposite
// edge would be closer than the minimum size.
fn shift_x(rect: &SelectionRect, dx: f64) -> f64 {
    (rect.x + rect.width - MIN_SELECTION_SIZE).min(rect.x + dx)
}

fn shift_y(rect: &SelectionRect, dy: f64) -> f64 {
    (rect.y + rect.height - MIN_SELECTION_SIZE).min(rect.y + dy)
}

fn resize_top_left(mut rect: SelectionRect, dx: f64, dy: f64) -> SelectionRect {
    rect.x = shift_x(&rect, dx);
    rect.width = floor(rect.width - dx);
    rect.height = floor(rect.height + dy);
    rect
}

fn resize_top(mut rect: SelectionRect, _dx: f64, dy: f64) -> SelectionRect {
    rect.height = floor(rect.height + dy);
    rect
}

fn resize_top_right(mut rect: SelectionRect, dx: f64, dy: f64) -> SelectionRect {
    rect.width = floor(rect.width + dx);
    rect.height = floor(rect.height + dy);
    rect
}

fn resize_right(mut rect: SelectionRect, dx: f64, _dy: f64) -> SelectionRect {
    rect.width = floor(rect.width + dx);
    rect
}

fn resize_bottom_right(mut rect: SelectionRect, dx: f64, dy: f64) -> SelectionRect {
    rect.y = shift_y(&rect, dy);
    rect.width = floor(rect.width + dx);
    rect.height = floor(rect.height - dy);
    rect
}

fn resize_bottom(mut rect: SelectionRect, _dx: f64, dy: f64) -> SelectionRect {
    rect.y = shift_y(&rect, dy);
    rect.height = floor(rect.height - dy);
    rect
}

fn resize_bottom_left(mut rect: SelectionRect, dx: f64, dy: f64) -> SelectionRect {
    rect.y = shift_y(&rect, dy);
    rect.x = shift_x(&rect, dx);
    rect.width = floor(rect.width - dx);
    rect.height = floor(rect.height - dy);
    rect
}

fn resize_left(mut rect: SelectionRect, dx: f64, _dy: f64) -> SelectionRect {
    rect.x = shift_x(&rect, dx);
    rect.width = floor(rect.width - dx);
    rect
}

/// Applies the transform for `handle`, then pins any edge dragged past
/// `bounds` to that edge. `Handle::None` leaves `rect` untouched.
pub fn resize_rect(handle: Handle, rect: SelectionRect, dx: f64, dy: f64, bounds: &SelectionRect) -> SelectionRect {
    RESIZE_TRANSFORMS
        .iter()
        .find(|(h, _)| *h == handle)
        .map(|(_, transform)| {
            transform(rect, dx, dy)
                .intersection(bounds)
                .with_minimum_size(bounds)
        })
        .unwrap_or(rect)
}

/// Translates `start` by the offset accumulated since the press, keeping the
/// rectangle inside `bounds`.
pub fn move_rect(start: SelectionRect, anchor: Point, current: Point, bounds: &SelectionRect) -> SelectionRect {
    let dx = current.x - anchor.x;
    let dy = current.y - anchor.y;
    let x = (start.x + dx)
        .min(bounds.max_x() - start.width)
        .max(bounds.min_x());
    let y = (start.y + dy)
        .min(bounds.max_y() - start.height)
        .max(bounds.min_y());
    SelectionRect::new(x, y, start.width, start.height)
}

/// Rectangle spanned from the press point to `current`. A pointer past any
/// edge of `bounds` is pinned to that edge, so the selection cannot run off
/// the surface.
pub fn create_rect(anchor: Point, current: Point, bounds: &SelectionRect) -> SelectionRect {
    let pinned = Point::new(
        current.x.clamp(bounds.min_x(), bounds.max_x()),
        current.y.clamp(bounds.min_y(), bounds.max_y()),
    );
    bounds.intersection(&SelectionRect::normalize(anchor, pinned))
}

/// New rectangle for one pointer move in `mode`.
///
/// `rect` is the current rectangle, `start` the rectangle at press time,
/// `anchor` the press location and `last` the previous pointer location.
pub fn update_interaction(
    mode: DragMode,
    rect: SelectionRect,
    start: SelectionRect,
    anchor: Point,
    last: Point,
    current: Point,
    bounds: &SelectionRect,
) -> SelectionRect {
    match mode {
        DragMode::Resizing(handle) => {
            resize_rect(handle, rect, current.x - last.x, current.y - last.y, bounds)
        }
        DragMode::Moving => move_rect(start, anchor, current, bounds),
        DragMode::Creating => create_rect(anchor, current, bounds),
        DragMode::Idle => rect,
    }
}
