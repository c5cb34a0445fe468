use anyhow::Result;
use serde::Serialize;

use crate::selection::SelectionRect;

/// A physical display the overlay can be attached to. `name` is the key the
/// remembered area is stored under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayInfo {
    pub id: u32,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub is_primary: bool,
}

impl DisplayInfo {
    /// The display's own surface, in display-local coordinates.
    pub fn local_frame(&self) -> SelectionRect {
        SelectionRect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }

    /// Converts a display-local (y-up) area to desktop coordinates, which are
    /// y-down with the origin at the top-left of the primary display.
    pub fn to_global(&self, area: &SelectionRect) -> SelectionRect {
        let top = self.height as f64 - area.max_y();
        SelectionRect::new(
            self.x as f64 + area.x,
            self.y as f64 + top,
            area.width,
            area.height,
        )
    }
}

pub fn list_displays() -> Result<Vec<DisplayInfo>> {
    let screens = xcap::Monitor::all()?;
    let displays: Vec<DisplayInfo> = screens
        .into_iter()
        .map(|s| DisplayInfo {
            id: s.id(),
            name: s.name().to_string(),
            x: s.x(),
            y: s.y(),
            width: s.width(),
            height: s.height(),
            is_primary: s.is_primary(),
        })
        .collect();
    Ok(displays)
}

/// Display named `preferred`, else the primary display, else the first one.
pub fn choose_display(displays: &[DisplayInfo], preferred: Option<&str>) -> Option<DisplayInfo> {
    if let Some(name) = preferred {
        if let Some(found) = displays.iter().find(|d| d.name == name) {
            return Some(found.clone());
        }
        tracing::warn!("Display {:?} not found, using primary display", name);
    }
    displays
        .iter()
        .find(|d| d.is_primary)
        .or_else(|| displays.first())
        .cloned()
}
