pub mod style;
pub mod views;

use iced::alignment::{Horizontal, Vertical};
use iced::keyboard::{self, key};
use iced::widget::{canvas, container, stack};
use iced::{Element, Length, Subscription, Task, Theme};
use std::time::Instant;

use crate::config::{parse_auto_stop_minutes, Background, Config, Resolution, VideoQuality};
use crate::display::DisplayInfo;
use crate::overlay::{InputRouter, ResizeCommand, RouterEvent, SizeFields};
use crate::recording::{
    Countdown, PressOutcome, RecordingRequest, RecordingSettings, TickOutcome, TICK_INTERVAL,
};
use crate::selection::{self, SelectionEngine, SelectionRect};
use crate::store::{AreaStore, JsonAreaStore, MemoryAreaStore};

use self::style::MonochromeTheme;
use self::views::{PanelView, SelectionOverlay};

const FALLBACK_DISPLAY_NAME: &str = "Display";
const FALLBACK_SURFACE: (f64, f64) = (1280.0, 800.0);

/// Pointer input in engine (y-up) coordinates.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    Pressed(selection::Point),
    Dragged {
        location: selection::Point,
        surface: selection::Size,
    },
    Released,
}

#[derive(Debug, Clone)]
pub enum Message {
    Pointer(PointerEvent),
    WidthChanged(String),
    HeightChanged(String),
    ResolutionSelected(Resolution),
    FrameRateSelected(u32),
    QualitySelected(VideoQuality),
    BackgroundSelected(Background),
    ShowCursorToggled(bool),
    AppAudioToggled(bool),
    MicrophoneToggled(bool),
    AutoStopChanged(String),
    StartPressed,
    Tick(Instant),
    Escape,
    Cancel,
}

pub struct App {
    config: Config,
    theme: MonochromeTheme,
    display: Option<DisplayInfo>,
    router: InputRouter<Box<dyn AreaStore>>,
    size_fields: SizeFields,
    countdown: Countdown,
    auto_stop_text: String,
    capture_area: Option<SelectionRect>,
}

impl App {
    pub fn new(config: Config, display: Option<DisplayInfo>) -> (Self, Task<Message>) {
        let theme = match config.ui.theme {
            crate::config::Theme::Dark => MonochromeTheme::dark(),
            crate::config::Theme::Light => MonochromeTheme::light(),
        };

        let store: Box<dyn AreaStore> = match JsonAreaStore::in_config_dir() {
            Some(store) => {
                tracing::debug!("Remembered areas at {}", store.path().display());
                Box::new(store)
            }
            None => {
                tracing::warn!("No config directory; selected areas will not be remembered");
                Box::new(MemoryAreaStore::new())
            }
        };

        let (name, host) = match &display {
            Some(d) => (d.name.clone(), d.local_frame()),
            None => (
                FALLBACK_DISPLAY_NAME.to_string(),
                SelectionRect::new(0.0, 0.0, FALLBACK_SURFACE.0, FALLBACK_SURFACE.1),
            ),
        };

        let mut engine = SelectionEngine::new(store, name);
        let requested = selection::Size::new(
            config.selector.width as f64,
            config.selector.height as f64,
        );
        let rect = engine.initialize(host, requested, !config.selector.remember_area);
        tracing::info!(display = engine.display(), ?rect, "Area selector ready");

        let mut size_fields = SizeFields::new(
            config.selector.width,
            config.selector.height,
            host.height as u32,
        );
        size_fields.reflect(&rect);

        let countdown = Countdown::new(config.recording.countdown_secs, Instant::now());
        let auto_stop_text = config.recording.auto_stop_minutes.to_string();

        let app = Self {
            config,
            theme,
            display,
            router: InputRouter::new(engine),
            size_fields,
            countdown,
            auto_stop_text,
            capture_area: Some(rect),
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        String::from("Area Selector")
    }

    pub fn theme(&self) -> Theme {
        if self.theme.is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Clear window background; the canvas paints the dimming itself.
    pub fn style(&self, theme: &Theme) -> iced::application::Appearance {
        iced::application::Appearance {
            background_color: iced::Color::TRANSPARENT,
            text_color: theme.palette().text,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pointer(event) => {
                let outcome = match event {
                    PointerEvent::Pressed(location) => Some(self.router.pointer_down(location)),
                    PointerEvent::Dragged { location, surface } => {
                        let bounds = SelectionRect::from_size(surface);
                        self.router.pointer_dragged(location, &bounds)
                    }
                    PointerEvent::Released => self.router.pointer_up(),
                };
                if let Some(RouterEvent::Changed(rect) | RouterEvent::Committed(rect)) = outcome {
                    self.capture_area = Some(rect);
                    self.size_fields.reflect(&rect);
                }
            }
            Message::WidthChanged(value) => {
                if let Some(command) = self.size_fields.edit_width(&value) {
                    self.apply_resize(command);
                }
            }
            Message::HeightChanged(value) => {
                if let Some(command) = self.size_fields.edit_height(&value) {
                    self.apply_resize(command);
                }
            }
            Message::ResolutionSelected(resolution) => {
                self.config.recording.resolution = resolution;
                self.save_config();
            }
            Message::FrameRateSelected(rate) => {
                self.config.recording.frame_rate = rate;
                self.save_config();
            }
            Message::QualitySelected(quality) => {
                self.config.recording.quality = quality;
                self.save_config();
            }
            Message::BackgroundSelected(background) => {
                self.config.recording.background = background;
                self.save_config();
            }
            Message::ShowCursorToggled(enabled) => {
                self.config.recording.show_cursor = enabled;
                self.save_config();
            }
            Message::AppAudioToggled(enabled) => {
                self.config.recording.record_app_audio = enabled;
                self.save_config();
            }
            Message::MicrophoneToggled(enabled) => {
                self.config.recording.record_mic = enabled;
                self.save_config();
            }
            Message::AutoStopChanged(value) => {
                if let Some(minutes) = parse_auto_stop_minutes(&value) {
                    self.config.recording.auto_stop_minutes = minutes;
                    self.save_config();
                }
                self.auto_stop_text = value;
            }
            Message::StartPressed => match self.countdown.press(Instant::now()) {
                PressOutcome::Fire => return self.start_recording(),
                PressOutcome::Armed(secs) => {
                    tracing::debug!("Countdown armed for {}s", secs);
                }
                PressOutcome::Cancelled => {
                    tracing::debug!("Countdown cancelled");
                }
            },
            Message::Tick(now) => {
                if self.countdown.tick(now) == TickOutcome::Fire {
                    return self.start_recording();
                }
            }
            Message::Escape => {
                if let Some(RouterEvent::Closed) = self.router.escape_pressed(false) {
                    return iced::exit();
                }
            }
            Message::Cancel => {
                self.router.escape_pressed(false);
                return iced::exit();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let engine = self.router.engine();
        let overlay = canvas(SelectionOverlay {
            rect: engine.rect(),
            mode: engine.mode(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let panel = PanelView::view(
            &self.theme,
            &self.size_fields,
            &self.config.recording,
            &self.auto_stop_text,
            &self.countdown,
        );
        let panel_layer = container(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(24);

        stack![overlay, panel_layer].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let escape = keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::Escape),
            _ => None,
        });

        if self.countdown.is_armed() {
            Subscription::batch([escape, iced::time::every(TICK_INTERVAL).map(Message::Tick)])
        } else {
            escape
        }
    }

    fn apply_resize(&mut self, ResizeCommand(size): ResizeCommand) {
        let rect = self.router.engine_mut().resize(size);
        self.capture_area = Some(rect);
        self.config.selector.width = size.width as u32;
        self.config.selector.height = size.height as u32;
        self.save_config();
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {}", e);
        }
    }

    fn start_recording(&mut self) -> Task<Message> {
        let settings = RecordingSettings::from(&self.config.recording);
        let request =
            match RecordingRequest::prepare(self.display.as_ref(), self.capture_area, settings) {
                Ok(request) => request,
                Err(e) => {
                    tracing::error!("Cannot start recording: {}", e);
                    return Task::none();
                }
            };

        match request.to_json_line() {
            Ok(line) => {
                tracing::info!(
                    display = %request.display.name,
                    area = ?request.area,
                    "Recording requested"
                );
                println!("{}", line);
                iced::exit()
            }
            Err(e) => {
                tracing::error!("Cannot start recording: {}", e);
                Task::none()
            }
        }
    }
}
