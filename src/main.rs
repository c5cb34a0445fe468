mod config;
mod display;
mod overlay;
mod recording;
mod selection;
mod store;
mod ui;

use iced::{window, Point, Size};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        config::Config::default()
    });

    let displays = display::list_displays().unwrap_or_else(|e| {
        tracing::warn!("Failed to enumerate displays: {}", e);
        Vec::new()
    });
    let display = display::choose_display(&displays, config.selector.display.as_deref());

    let (size, position) = match &display {
        Some(d) => (
            Size::new(d.width as f32, d.height as f32),
            window::Position::Specific(Point::new(d.x as f32, d.y as f32)),
        ),
        None => (Size::new(1280.0, 800.0), window::Position::Centered),
    };

    iced::application(ui::App::title, ui::App::update, ui::App::view)
        .subscription(ui::App::subscription)
        .theme(ui::App::theme)
        .style(ui::App::style)
        .window(window::Settings {
            size,
            position,
            resizable: false,
            decorations: false,
            transparent: true,
            level: window::Level::AlwaysOnTop,
            ..Default::default()
        })
        .run_with(move || ui::App::new(config, display))
}
