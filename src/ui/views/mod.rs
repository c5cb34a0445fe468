mod overlay_view;
mod panel_view;

pub use overlay_view::SelectionOverlay;
pub use panel_view::PanelView;
