use super::{Handle, Point, SelectionRect, HANDLE_SIZE};

const HALF: f64 = HANDLE_SIZE / 2.0;

/// Origin (bottom-left corner) of the hit box for `handle`.
///
/// Boxes straddle the border: on the side a handle controls they sit one unit
/// further out than centered, so a press just outside the drawn outline still
/// grabs the handle. Midpoint handles are centered along their edge.
pub fn control_point_for_handle(handle: Handle, rect: &SelectionRect) -> Option<Point> {
    let left = rect.min_x() - HALF - 1.0;
    let center_x = rect.mid_x() - HALF;
    let right = rect.max_x() - HALF + 1.0;
    let bottom = rect.min_y() - HALF - 1.0;
    let center_y = rect.mid_y() - HALF;
    let top = rect.max_y() - HALF + 1.0;

    let point = match handle {
        Handle::TopLeft => Point::new(left, top),
        Handle::Top => Point::new(center_x, top),
        Handle::TopRight => Point::new(right, top),
        Handle::Right => Point::new(right, center_y),
        Handle::BottomRight => Point::new(right, bottom),
        Handle::Bottom => Point::new(center_x, bottom),
        Handle::BottomLeft => Point::new(left, bottom),
        Handle::Left => Point::new(left, center_y),
        Handle::None => return None,
    };
    Some(point)
}

pub fn handle_box(handle: Handle, rect: &SelectionRect) -> Option<SelectionRect> {
    control_point_for_handle(handle, rect)
        .map(|origin| SelectionRect::new(origin.x, origin.y, HANDLE_SIZE, HANDLE_SIZE))
}

/// First handle whose hit box contains `point`, or `Handle::None`.
///
/// A point inside the rectangle body but off every handle is also `None`;
/// telling a body drag apart from a fresh selection is up to the caller.
pub fn hit_test(rect: &SelectionRect, point: Point) -> Handle {
    Handle::GRABBABLE
        .into_iter()
        .find(|&handle| handle_box(handle, rect).is_some_and(|b| b.contains(point)))
        .unwrap_or(Handle::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SelectionRect {
        SelectionRect::new(100.0, 100.0, 200.0, 150.0)
    }

    #[test]
    fn test_none_has_no_control_point() {
        assert!(control_point_for_handle(Handle::None, &sample()).is_none());
    }

    #[test]
    fn test_corner_control_points() {
        let rect = sample();
        assert_eq!(
            control_point_for_handle(Handle::TopLeft, &rect),
            Some(Point::new(94.0, 246.0))
        );
        assert_eq!(
            control_point_for_handle(Handle::BottomRight, &rect),
            Some(Point::new(296.0, 94.0))
        );
    }

    #[test]
    fn test_left_right_boxes_mirror_across_midline() {
        let rect = sample();
        let left = handle_box(Handle::Left, &rect).unwrap();
        let right = handle_box(Handle::Right, &rect).unwrap();
        let mid = rect.mid_x();
        assert_eq!(mid - left.mid_x(), right.mid_x() - mid);
        assert_eq!(left.mid_y(), right.mid_y());
        assert_eq!(left.min_x(), 2.0 * mid - right.max_x());
    }

    #[test]
    fn test_top_bottom_boxes_mirror_across_midline() {
        let rect = sample();
        let top = handle_box(Handle::Top, &rect).unwrap();
        let bottom = handle_box(Handle::Bottom, &rect).unwrap();
        let mid = rect.mid_y();
        assert_eq!(top.mid_y() - mid, mid - bottom.mid_y());
    }

    #[test]
    fn test_hit_test_each_handle_at_its_box_center() {
        let rect = sample();
        for handle in Handle::GRABBABLE {
            let center = handle_box(handle, &rect).unwrap().center();
            assert_eq!(hit_test(&rect, center), handle, "{:?}", handle);
        }
    }

    #[test]
    fn test_hit_test_just_outside_border() {
        let rect = sample();
        // Five units left of the left edge, vertically centered.
        assert_eq!(hit_test(&rect, Point::new(95.0, 175.0)), Handle::Left);
        assert_eq!(hit_test(&rect, Point::new(93.0, 175.0)), Handle::None);
    }

    #[test]
    fn test_hit_test_body_is_none() {
        let rect = sample();
        assert_eq!(hit_test(&rect, rect.center()), Handle::None);
        assert_eq!(hit_test(&rect, Point::new(500.0, 500.0)), Handle::None);
    }
}
