use iced::mouse;
use iced::widget::canvas;
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use crate::selection::{self, handle_box, hit_test, DragMode, Handle, SelectionRect};
use crate::ui::style::{
    OVERLAY_BORDER, OVERLAY_BORDER_WIDTH, OVERLAY_DASH, OVERLAY_DIM, OVERLAY_HANDLE,
};
use crate::ui::{Message, PointerEvent};

/// Canvas program that draws the selection and forwards pointer input.
///
/// The engine works y-up; the canvas is y-down. Points are flipped against
/// the canvas height on the way in and rectangles on the way out.
pub struct SelectionOverlay {
    pub rect: SelectionRect,
    pub mode: DragMode,
}

fn to_engine(position: Point, bounds: &Rectangle) -> selection::Point {
    selection::Point::new(position.x as f64, (bounds.height - position.y) as f64)
}

fn to_screen(rect: &SelectionRect, bounds: &Rectangle) -> Rectangle {
    Rectangle {
        x: rect.x as f32,
        y: bounds.height - rect.max_y() as f32,
        width: rect.width as f32,
        height: rect.height as f32,
    }
}

fn surface_size(bounds: &Rectangle) -> selection::Size {
    selection::Size::new(bounds.width as f64, bounds.height as f64)
}

impl canvas::Program<Message> for SelectionOverlay {
    /// Whether the left button went down on this canvas.
    type State = bool;

    fn update(
        &self,
        pressed: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let Some(position) = cursor.position_in(bounds) else {
                    return (canvas::event::Status::Ignored, None);
                };
                *pressed = true;
                (
                    canvas::event::Status::Captured,
                    Some(Message::Pointer(PointerEvent::Pressed(to_engine(
                        position, &bounds,
                    )))),
                )
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) if *pressed => {
                let Some(position) = cursor.position_from(bounds.position()) else {
                    return (canvas::event::Status::Ignored, None);
                };
                (
                    canvas::event::Status::Captured,
                    Some(Message::Pointer(PointerEvent::Dragged {
                        location: to_engine(position, &bounds),
                        surface: surface_size(&bounds),
                    })),
                )
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if *pressed => {
                *pressed = false;
                (
                    canvas::event::Status::Captured,
                    Some(Message::Pointer(PointerEvent::Released)),
                )
            }
            _ => (canvas::event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry<Renderer>> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let selected = to_screen(&self.rect, &bounds);

        // Dim everything around the selection.
        let bands = [
            (Point::ORIGIN, Size::new(bounds.width, selected.y.max(0.0))),
            (
                Point::new(0.0, selected.y + selected.height),
                Size::new(bounds.width, (bounds.height - selected.y - selected.height).max(0.0)),
            ),
            (
                Point::new(0.0, selected.y),
                Size::new(selected.x.max(0.0), selected.height),
            ),
            (
                Point::new(selected.x + selected.width, selected.y),
                Size::new((bounds.width - selected.x - selected.width).max(0.0), selected.height),
            ),
        ];
        for (top_left, size) in bands {
            frame.fill_rectangle(top_left, size, OVERLAY_DIM);
        }

        let outline = canvas::Path::rectangle(selected.position(), selected.size());
        frame.stroke(
            &outline,
            canvas::Stroke {
                line_dash: canvas::LineDash {
                    segments: &OVERLAY_DASH,
                    offset: 0,
                },
                ..canvas::Stroke::default()
                    .with_color(OVERLAY_BORDER)
                    .with_width(OVERLAY_BORDER_WIDTH)
            },
        );

        for handle in Handle::GRABBABLE {
            if let Some(hit_box) = handle_box(handle, &self.rect) {
                let on_screen = to_screen(&hit_box, &bounds);
                let dot = canvas::Path::circle(on_screen.center(), on_screen.width / 2.0);
                frame.fill(&dot, handle_color(self.mode, handle));
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        pressed: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if let DragMode::Resizing(handle) = self.mode {
            return resize_cursor(handle);
        }
        if *pressed && self.mode == DragMode::Moving {
            return mouse::Interaction::Grabbing;
        }
        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };
        let point = to_engine(position, &bounds);
        match hit_test(&self.rect, point) {
            Handle::None if self.rect.contains(point) => mouse::Interaction::Grab,
            Handle::None => mouse::Interaction::Crosshair,
            handle => resize_cursor(handle),
        }
    }
}

fn handle_color(mode: DragMode, handle: Handle) -> Color {
    match mode {
        DragMode::Resizing(active) if active == handle => Color::WHITE,
        _ => OVERLAY_HANDLE,
    }
}

fn resize_cursor(handle: Handle) -> mouse::Interaction {
    match handle {
        Handle::Left | Handle::Right => mouse::Interaction::ResizingHorizontally,
        Handle::Top | Handle::Bottom => mouse::Interaction::ResizingVertically,
        Handle::TopRight | Handle::BottomLeft => mouse::Interaction::ResizingDiagonallyUp,
        Handle::TopLeft | Handle::BottomRight => mouse::Interaction::ResizingDiagonallyDown,
        Handle::None => mouse::Interaction::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(1000.0, 800.0))
    }

    #[test]
    fn test_to_engine_flips_y() {
        let point = to_engine(Point::new(10.0, 100.0), &bounds());
        assert_eq!(point, selection::Point::new(10.0, 700.0));
    }

    #[test]
    fn test_to_screen_flips_rect() {
        let rect = SelectionRect::new(200.0, 175.0, 600.0, 450.0);
        let on_screen = to_screen(&rect, &bounds());
        assert_eq!(on_screen.x, 200.0);
        assert_eq!(on_screen.y, 175.0);
        assert_eq!(on_screen.height, 450.0);

        let low = SelectionRect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(to_screen(&low, &bounds()).y, 700.0);
    }

    #[test]
    fn test_resize_cursor_for_edges() {
        assert_eq!(resize_cursor(Handle::Left), mouse::Interaction::ResizingHorizontally);
        assert_eq!(resize_cursor(Handle::Bottom), mouse::Interaction::ResizingVertically);
    }

    #[test]
    fn test_resize_cursor_for_corners() {
        assert_eq!(resize_cursor(Handle::TopRight), mouse::Interaction::ResizingDiagonallyUp);
        assert_eq!(resize_cursor(Handle::BottomLeft), mouse::Interaction::ResizingDiagonallyUp);
        assert_eq!(resize_cursor(Handle::TopLeft), mouse::Interaction::ResizingDiagonallyDown);
        assert_eq!(resize_cursor(Handle::BottomRight), mouse::Interaction::ResizingDiagonallyDown);
    }
}
