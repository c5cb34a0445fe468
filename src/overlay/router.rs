use crate::selection::{DragMode, Point, SelectionEngine, SelectionRect};
use crate::store::AreaStore;

/// What the host should do after a pointer or key callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouterEvent {
    /// Interaction state changed; repaint handles/cursor.
    Redraw,
    /// The rectangle changed mid-interaction.
    Changed(SelectionRect),
    /// Pointer released; the rectangle has been remembered.
    Committed(SelectionRect),
    /// Overlay dismissed without remembering anything.
    Closed,
}

#[derive(Debug, Clone, Copy)]
struct Tracking {
    initial_location: Point,
    last_mouse_location: Point,
    pressed_inside: bool,
}

/// Translates raw pointer callbacks into selection-engine calls.
pub struct InputRouter<S: AreaStore> {
    engine: SelectionEngine<S>,
    tracking: Option<Tracking>,
}

impl<S: AreaStore> InputRouter<S> {
    pub fn new(engine: SelectionEngine<S>) -> Self {
        Self {
            engine,
            tracking: None,
        }
    }

    pub fn engine(&self) -> &SelectionEngine<S> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SelectionEngine<S> {
        &mut self.engine
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    pub fn pointer_down(&mut self, location: Point) -> RouterEvent {
        let pressed_inside = self.engine.rect().contains(location);
        let mode = self.engine.begin_interaction_with(location, pressed_inside);
        tracing::debug!(?mode, pressed_inside, x = location.x, y = location.y, "Pointer down");

        self.tracking = Some(Tracking {
            initial_location: location,
            last_mouse_location: location,
            pressed_inside,
        });
        RouterEvent::Redraw
    }

    /// `bounds` is the host surface's frame at the time of the drag.
    pub fn pointer_dragged(&mut self, location: Point, bounds: &SelectionRect) -> Option<RouterEvent> {
        let tracking = self.tracking.as_mut()?;
        let rect = self
            .engine
            .update_interaction(tracking.last_mouse_location, location, bounds)?;
        tracking.last_mouse_location = location;
        Some(RouterEvent::Changed(rect))
    }

    pub fn pointer_up(&mut self) -> Option<RouterEvent> {
        let tracking = self.tracking.take()?;
        let mode = self.engine.mode();
        let rect = self.engine.end_interaction();
        tracing::debug!(
            ?mode,
            pressed_inside = tracking.pressed_inside,
            from_x = tracking.initial_location.x,
            from_y = tracking.initial_location.y,
            ?rect,
            "Interaction finished"
        );
        Some(RouterEvent::Committed(rect))
    }

    /// Escape closes the overlay; auto-repeat events are ignored.
    pub fn escape_pressed(&mut self, is_repeat: bool) -> Option<RouterEvent> {
        if is_repeat {
            return None;
        }
        self.tracking = None;
        self.engine.cancel();
        tracing::info!("Area selection cancelled");
        Some(RouterEvent::Closed)
    }

    pub fn mode(&self) -> DragMode {
        self.engine.mode()
    }
}
