use crate::selection::{SelectionRect, Size};

/// Request to re-center a selection of the given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeCommand(pub Size);

/// Width/height text inputs of the control panel.
///
/// Edits flow one way: text becomes a [`ResizeCommand`] for the engine, and
/// engine rectangles come back through [`SizeFields::reflect`], which never
/// produces a command.
#[derive(Debug, Clone)]
pub struct SizeFields {
    width_text: String,
    height_text: String,
    width: u32,
    height: u32,
    max_height: u32,
}

impl SizeFields {
    pub fn new(width: u32, height: u32, max_height: u32) -> Self {
        let max_height = max_height.max(1);
        let width = width.max(1);
        let height = height.clamp(1, max_height);
        Self {
            width_text: width.to_string(),
            height_text: height.to_string(),
            width,
            height,
            max_height,
        }
    }

    pub fn width_text(&self) -> &str {
        &self.width_text
    }

    pub fn height_text(&self) -> &str {
        &self.height_text
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }

    pub fn edit_width(&mut self, text: &str) -> Option<ResizeCommand> {
        self.width_text = text.to_string();
        self.width = parse_dimension(text)?;
        Some(self.command())
    }

    pub fn edit_height(&mut self, text: &str) -> Option<ResizeCommand> {
        self.height_text = text.to_string();
        self.height = parse_dimension(text)?;
        Some(self.command())
    }

    /// Mirrors an engine rectangle into the fields.
    pub fn reflect(&mut self, rect: &SelectionRect) {
        self.width = rect.width.round().max(1.0) as u32;
        self.height = rect.height.round().max(1.0) as u32;
        self.width_text = self.width.to_string();
        self.height_text = self.height.to_string();
    }

    fn command(&mut self) -> ResizeCommand {
        if self.height > self.max_height {
            self.height = self.max_height;
            self.height_text = self.height.to_string();
        }
        ResizeCommand(self.size())
    }
}

/// Integer text clamped to at least 1; anything else is rejected.
fn parse_dimension(text: &str) -> Option<u32> {
    let value: i64 = text.trim().parse().ok()?;
    Some(value.clamp(1, u32::MAX as i64) as u32)
}
