use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Vector};

pub const RECORD_RED: Color = Color::from_rgb(0.9, 0.2, 0.2);
pub const RECORD_RED_HOVER: Color = Color::from_rgb(1.0, 0.3, 0.3);
const PANEL_RADIUS: f32 = 10.0;
const BUTTON_RADIUS: f32 = 6.0;

// Overlay
pub const OVERLAY_DIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
pub const OVERLAY_BORDER: Color = Color::WHITE;
pub const OVERLAY_HANDLE: Color = Color::from_rgb(1.0, 0.8, 0.0);
pub const OVERLAY_BORDER_WIDTH: f32 = 4.0;
pub const OVERLAY_DASH: [f32; 2] = [4.0, 4.0];

/// Colors of the floating control panel. The panel sits over the dimmed
/// display, so its fill is slightly translucent.
#[derive(Debug, Clone, Copy)]
pub struct MonochromeTheme {
    pub is_dark: bool,
    panel: Color,
    outline: Color,
    button: Color,
    button_hover: Color,
    text: Color,
}

impl MonochromeTheme {
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            panel: Color::from_rgba(0.1, 0.1, 0.1, 0.92),
            outline: Color::from_rgb(0.22, 0.22, 0.22),
            button: Color::from_rgb(0.2, 0.2, 0.2),
            button_hover: Color::from_rgb(0.27, 0.27, 0.27),
            text: Color::from_rgb(0.9, 0.9, 0.9),
        }
    }

    pub fn light() -> Self {
        Self {
            is_dark: false,
            panel: Color::from_rgba(0.96, 0.96, 0.96, 0.92),
            outline: Color::from_rgb(0.8, 0.8, 0.8),
            button: Color::from_rgb(0.86, 0.86, 0.86),
            button_hover: Color::from_rgb(0.76, 0.76, 0.76),
            text: Color::from_rgb(0.1, 0.1, 0.1),
        }
    }

    fn button_with(&self, fill: Color, text: Color) -> button::Style {
        button::Style {
            background: Some(Background::Color(fill)),
            text_color: text,
            border: Border {
                radius: BUTTON_RADIUS.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
        }
    }
}

impl Default for MonochromeTheme {
    fn default() -> Self {
        Self::dark()
    }
}

pub fn tile_button_style(theme: &MonochromeTheme) -> button::Style {
    theme.button_with(theme.button, theme.text)
}

pub fn tile_button_hovered_style(theme: &MonochromeTheme) -> button::Style {
    theme.button_with(theme.button_hover, theme.text)
}

pub fn record_button_style(theme: &MonochromeTheme, hovered: bool) -> button::Style {
    let fill = if hovered { RECORD_RED_HOVER } else { RECORD_RED };
    theme.button_with(fill, Color::WHITE)
}

pub fn panel_container_style(theme: &MonochromeTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.panel)),
        text_color: Some(theme.text),
        border: Border {
            color: theme.outline,
            width: 1.0,
            radius: PANEL_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
    }
}
