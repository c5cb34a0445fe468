use crate::store::AreaStore;

use super::transform;
use super::{handles, DragMode, Handle, Point, SelectionRect, Size, MIN_SELECTION_SIZE};

/// State captured when a pointer interaction begins.
#[derive(Debug, Clone, Copy)]
struct Press {
    anchor: Point,
    rect: SelectionRect,
}

/// Owns the selection rectangle for one overlay surface and the interaction
/// currently applied to it.
///
/// Every mutating call returns the resulting rectangle; forwarding it to
/// whatever consumes the capture area is the caller's job.
pub struct SelectionEngine<S: AreaStore> {
    store: S,
    display: String,
    host: SelectionRect,
    rect: SelectionRect,
    mode: DragMode,
    press: Option<Press>,
}

impl<S: AreaStore> SelectionEngine<S> {
    pub fn new(store: S, display: impl Into<String>) -> Self {
        Self {
            store,
            display: display.into(),
            host: SelectionRect::default(),
            rect: SelectionRect::default(),
            mode: DragMode::Idle,
            press: None,
        }
    }

    pub fn rect(&self) -> SelectionRect {
        self.rect
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Centers `requested` in `host`, unless a remembered area exists for this
    /// display and `force_default` is false. A remembered area is taken as-is.
    pub fn initialize(&mut self, host: SelectionRect, requested: Size, force_default: bool) -> SelectionRect {
        self.host = host;
        self.mode = DragMode::Idle;
        self.press = None;

        let size = Size::new(
            requested.width.max(MIN_SELECTION_SIZE).min(host.width.max(MIN_SELECTION_SIZE)),
            requested.height.max(MIN_SELECTION_SIZE).min(host.height.max(MIN_SELECTION_SIZE)),
        );
        self.rect = host.centered(size);

        if !force_default {
            match self.store.load(&self.display) {
                Ok(Some(saved)) => {
                    tracing::debug!(display = %self.display, ?saved, "Restored remembered area");
                    self.rect = saved;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Failed to read remembered area for {}: {}", self.display, e);
                }
            }
        }

        self.rect
    }

    /// Re-centers a rectangle of `size`, ignoring any remembered area, and
    /// remembers the result.
    pub fn resize(&mut self, size: Size) -> SelectionRect {
        let rect = self.initialize(self.host, size, true);
        self.persist(rect);
        rect
    }

    pub fn hit_test(&self, point: Point) -> Handle {
        handles::hit_test(&self.rect, point)
    }

    /// Chooses the interaction for a press at `point`: a handle wins, then the
    /// rectangle body, otherwise a new rectangle is drawn.
    pub fn begin_interaction(&mut self, point: Point) -> DragMode {
        let inside = self.rect.contains(point);
        self.begin_interaction_with(point, inside)
    }

    /// Like [`begin_interaction`](Self::begin_interaction), with containment
    /// already decided by the caller at press time.
    pub fn begin_interaction_with(&mut self, point: Point, pressed_inside: bool) -> DragMode {
        let handle = self.hit_test(point);
        self.mode = if !handle.is_none() {
            DragMode::Resizing(handle)
        } else if pressed_inside {
            DragMode::Moving
        } else {
            DragMode::Creating
        };
        self.press = Some(Press {
            anchor: point,
            rect: self.rect,
        });
        self.mode
    }

    /// Applies one pointer move. Returns `None` when no interaction is active.
    pub fn update_interaction(&mut self, last: Point, current: Point, bounds: &SelectionRect) -> Option<SelectionRect> {
        let press = self.press?;
        self.rect = transform::update_interaction(
            self.mode, self.rect, press.rect, press.anchor, last, current, bounds,
        );
        Some(self.rect)
    }

    /// Finishes the interaction and remembers the rectangle for this display.
    pub fn end_interaction(&mut self) -> SelectionRect {
        if self.mode == DragMode::Creating && !self.rect.meets_minimum() {
            self.rect = self.rect.with_minimum_size(&self.host);
        }
        self.mode = DragMode::Idle;
        self.press = None;
        self.persist(self.rect);
        self.rect
    }

    /// Drops an in-flight interaction without remembering anything.
    pub fn cancel(&mut self) {
        if let Some(press) = self.press.take() {
            self.rect = press.rect;
        }
        self.mode = DragMode::Idle;
    }

    fn persist(&mut self, rect: SelectionRect) {
        if let Err(e) = self.store.save(&self.display, rect) {
            tracing::warn!("Failed to remember area for {}: {}", self.display, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryAreaStore, StoreError, StoreResult};

    const DISPLAY: &str = "Built-in Retina Display";

    fn host() -> SelectionRect {
        SelectionRect::new(0.0, 0.0, 1000.0, 800.0)
    }

    fn engine() -> SelectionEngine<MemoryAreaStore> {
        let mut engine = SelectionEngine::new(MemoryAreaStore::new(), DISPLAY);
        engine.initialize(host(), Size::new(600.0, 450.0), true);
        engine
    }

    struct FailingStore;

    impl AreaStore for FailingStore {
        fn load(&self, _display: &str) -> StoreResult<Option<SelectionRect>> {
            Err(StoreError::Io(std::io::Error::other("unreadable")))
        }

        fn save(&mut self, _display: &str, _rect: SelectionRect) -> StoreResult<()> {
            Err(StoreError::Io(std::io::Error::other("read-only")))
        }
    }

    #[test]
    fn test_initialize_centers_default() {
        let mut engine = SelectionEngine::new(MemoryAreaStore::new(), DISPLAY);
        let rect = engine.initialize(host(), Size::new(600.0, 450.0), true);
        assert_eq!(rect, SelectionRect::new(200.0, 175.0, 600.0, 450.0));
        assert!(engine.mode().is_idle());
    }

    #[test]
    fn test_initialize_prefers_remembered_area() {
        let saved = SelectionRect::new(5.0, 7.0, 11.0, 13.0);
        let mut store = MemoryAreaStore::new();
        store.save(DISPLAY, saved).unwrap();

        let mut engine = SelectionEngine::new(store, DISPLAY);
        // Remembered values are used verbatim, even below the minimum.
        assert_eq!(engine.initialize(host(), Size::new(600.0, 450.0), false), saved);
    }

    #[test]
    fn test_initialize_force_ignores_remembered_area() {
        let mut store = MemoryAreaStore::new();
        store.save(DISPLAY, SelectionRect::new(5.0, 7.0, 300.0, 300.0)).unwrap();

        let mut engine = SelectionEngine::new(store, DISPLAY);
        let rect = engine.initialize(host(), Size::new(600.0, 450.0), true);
        assert_eq!(rect, SelectionRect::new(200.0, 175.0, 600.0, 450.0));
    }

    #[test]
    fn test_initialize_other_display_falls_back() {
        let mut store = MemoryAreaStore::new();
        store.save("External", SelectionRect::new(5.0, 7.0, 300.0, 300.0)).unwrap();

        let mut engine = SelectionEngine::new(store, DISPLAY);
        let rect = engine.initialize(host(), Size::new(600.0, 450.0), false);
        assert_eq!(rect, SelectionRect::new(200.0, 175.0, 600.0, 450.0));
    }

    #[test]
    fn test_initialize_clamps_requested_size() {
        let mut engine = SelectionEngine::new(MemoryAreaStore::new(), DISPLAY);
        let tiny = engine.initialize(host(), Size::new(1.0, 1.0), true);
        assert_eq!(tiny.size(), Size::new(MIN_SELECTION_SIZE, MIN_SELECTION_SIZE));

        let huge = engine.initialize(host(), Size::new(5000.0, 5000.0), true);
        assert_eq!(huge, host());
    }

    #[test]
    fn test_begin_interaction_modes() {
        let mut engine = engine();
        assert_eq!(
            engine.begin_interaction(Point::new(200.0, 175.0 + 225.0)),
            DragMode::Resizing(Handle::Left)
        );
        engine.end_interaction();

        assert_eq!(engine.begin_interaction(Point::new(500.0, 400.0)), DragMode::Moving);
        engine.end_interaction();

        assert_eq!(engine.begin_interaction(Point::new(50.0, 50.0)), DragMode::Creating);
        engine.end_interaction();
        assert!(engine.mode().is_idle());
    }

    #[test]
    fn test_begin_interaction_with_cached_containment() {
        let mut engine = engine();
        let body = Point::new(500.0, 400.0);
        assert_eq!(engine.begin_interaction_with(body, true), DragMode::Moving);
        engine.cancel();
        assert_eq!(engine.begin_interaction_with(body, false), DragMode::Creating);
        engine.cancel();

        // A handle wins regardless of containment.
        let right = Point::new(801.0, 400.0);
        assert_eq!(
            engine.begin_interaction_with(right, false),
            DragMode::Resizing(Handle::Right)
        );
    }

    #[test]
    fn test_update_without_press_is_ignored() {
        let mut engine = engine();
        let before = engine.rect();
        assert!(engine
            .update_interaction(Point::new(0.0, 0.0), Point::new(10.0, 10.0), &host())
            .is_none());
        assert_eq!(engine.rect(), before);
    }

    #[test]
    fn test_resize_drag_sequence() {
        let mut engine = engine();
        // Right handle box center.
        let start = Point::new(801.0, 400.0);
        assert_eq!(engine.begin_interaction(start), DragMode::Resizing(Handle::Right));

        let mid = Point::new(821.0, 400.0);
        engine.update_interaction(start, mid, &host());
        let end = Point::new(851.0, 410.0);
        let rect = engine.update_interaction(mid, end, &host()).unwrap();
        assert_eq!(rect, SelectionRect::new(200.0, 175.0, 650.0, 450.0));
    }

    #[test]
    fn test_move_drag_is_relative_to_press() {
        let mut engine = engine();
        let anchor = Point::new(500.0, 400.0);
        engine.begin_interaction(anchor);
        engine.update_interaction(anchor, Point::new(520.0, 400.0), &host());
        let rect = engine
            .update_interaction(Point::new(520.0, 400.0), Point::new(540.0, 390.0), &host())
            .unwrap();
        assert_eq!(rect, SelectionRect::new(240.0, 165.0, 600.0, 450.0));
    }

    #[test]
    fn test_end_interaction_round_trips_through_store() {
        let mut engine = engine();
        let anchor = Point::new(500.0, 400.0);
        engine.begin_interaction(anchor);
        engine.update_interaction(anchor, Point::new(450.0, 300.0), &host());
        let committed = engine.end_interaction();

        let store = std::mem::take(&mut engine.store);
        let mut reopened = SelectionEngine::new(store, DISPLAY);
        assert_eq!(
            reopened.initialize(host(), Size::new(600.0, 450.0), false),
            committed
        );
    }

    #[test]
    fn test_tiny_created_rect_is_floored_on_release() {
        let mut engine = engine();
        let anchor = Point::new(50.0, 50.0);
        engine.begin_interaction(anchor);
        engine.update_interaction(anchor, Point::new(53.0, 52.0), &host());
        let rect = engine.end_interaction();
        assert_eq!(rect, SelectionRect::new(50.0, 50.0, 20.0, 20.0));
    }

    #[test]
    fn test_cancel_restores_and_skips_persist() {
        let mut engine = engine();
        let before = engine.rect();
        let anchor = Point::new(500.0, 400.0);
        engine.begin_interaction(anchor);
        engine.update_interaction(anchor, Point::new(600.0, 500.0), &host());
        engine.cancel();

        assert_eq!(engine.rect(), before);
        assert!(engine.mode().is_idle());
        assert!(engine.store().load(DISPLAY).unwrap().is_none());
    }

    #[test]
    fn test_resize_recenters_and_persists() {
        let mut engine = engine();
        let rect = engine.resize(Size::new(400.0, 300.0));
        assert_eq!(rect, SelectionRect::new(300.0, 250.0, 400.0, 300.0));
        assert_eq!(engine.store().load(DISPLAY).unwrap(), Some(rect));
    }

    #[test]
    fn test_store_failures_are_not_fatal() {
        let mut engine = SelectionEngine::new(FailingStore, DISPLAY);
        let rect = engine.initialize(host(), Size::new(600.0, 450.0), false);
        assert_eq!(rect, SelectionRect::new(200.0, 175.0, 600.0, 450.0));

        engine.begin_interaction(Point::new(500.0, 400.0));
        assert_eq!(engine.end_interaction(), rect);
    }
}
