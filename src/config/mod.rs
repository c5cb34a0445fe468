use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const FRAME_RATES: &[u32] = &[240, 144, 120, 90, 60, 30, 24, 15, 10];
const DEFAULT_FRAME_RATE: u32 = 60;
const MAX_SELECTION_DIMENSION: u32 = 16384;
const MAX_COUNTDOWN_SECS: u32 = 60;
const MAX_AUTO_STOP_MINUTES: u32 = 1440;
const MAX_DISPLAY_NAME_LEN: usize = 256;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub selector: SelectorConfig,
    pub recording: RecordingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorConfig {
    /// Size of a freshly centered selection; also the last size typed in.
    pub width: u32,
    pub height: u32,
    /// Restore the last area used on a display instead of centering.
    #[serde(default = "default_true")]
    pub remember_area: bool,
    /// Display to open on, by name. Primary display when unset.
    #[serde(default)]
    pub display: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordingConfig {
    pub frame_rate: u32,
    pub quality: VideoQuality,
    pub resolution: Resolution,
    pub show_cursor: bool,
    #[serde(default)]
    pub record_mic: bool,
    #[serde(default = "default_true")]
    pub record_app_audio: bool,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub countdown_secs: u32,
    #[serde(default)]
    pub auto_stop_minutes: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VideoQuality {
    Low,
    Medium,
    High,
}

impl VideoQuality {
    pub fn all() -> &'static [VideoQuality] {
        &[VideoQuality::Low, VideoQuality::Medium, VideoQuality::High]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VideoQuality::Low => "Low",
            VideoQuality::Medium => "Medium",
            VideoQuality::High => "High",
        }
    }

    /// Encoder quality factor.
    pub fn factor(&self) -> f64 {
        match self {
            VideoQuality::Low => 0.3,
            VideoQuality::Medium => 0.7,
            VideoQuality::High => 1.0,
        }
    }
}

impl std::fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Resolution {
    High,
    Normal,
    Low,
}

impl Resolution {
    pub fn all() -> &'static [Resolution] {
        &[Resolution::High, Resolution::Normal, Resolution::Low]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Resolution::High => "High (auto)",
            Resolution::Normal => "Normal (1x)",
            Resolution::Low => "Low (0.5x)",
        }
    }

    /// Pixel scale applied to the area; `None` follows the display's own.
    pub fn scale(&self) -> Option<f64> {
        match self {
            Resolution::High => None,
            Resolution::Normal => Some(1.0),
            Resolution::Low => Some(0.5),
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// What fills the recording behind the captured area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    Wallpaper,
    Clear,
    Black,
    White,
    Gray,
    Yellow,
    Orange,
    Green,
    Blue,
    Red,
    Custom,
}

impl Background {
    pub fn all() -> &'static [Background] {
        &[
            Background::Wallpaper,
            Background::Clear,
            Background::Black,
            Background::White,
            Background::Gray,
            Background::Yellow,
            Background::Orange,
            Background::Green,
            Background::Blue,
            Background::Red,
            Background::Custom,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Background::Wallpaper => "Wallpaper",
            Background::Clear => "Transparent",
            Background::Black => "Black",
            Background::White => "White",
            Background::Gray => "Gray",
            Background::Yellow => "Yellow",
            Background::Orange => "Orange",
            Background::Green => "Green",
            Background::Blue => "Blue",
            Background::Red => "Red",
            Background::Custom => "Custom",
        }
    }
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Minutes typed into the "Stop after" field. Blank means no limit; values
/// above the maximum are capped. Anything else is rejected.
pub fn parse_auto_stop_minutes(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0);
    }
    let minutes: u32 = text.parse().ok()?;
    Some(minutes.min(MAX_AUTO_STOP_MINUTES))
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.selector.width), ("height", self.selector.height)] {
            if value == 0 || value > MAX_SELECTION_DIMENSION {
                return Err(anyhow!(
                    "selector {} must be between 1 and {}",
                    name,
                    MAX_SELECTION_DIMENSION
                ));
            }
        }
        if let Some(display) = &self.selector.display {
            if display.len() > MAX_DISPLAY_NAME_LEN {
                return Err(anyhow!("selector display name too long"));
            }
        }
        if !FRAME_RATES.contains(&self.recording.frame_rate) {
            return Err(anyhow!(
                "frame_rate must be one of {:?}",
                FRAME_RATES
            ));
        }
        if self.recording.countdown_secs > MAX_COUNTDOWN_SECS {
            return Err(anyhow!("countdown_secs must be <= {}", MAX_COUNTDOWN_SECS));
        }
        if self.recording.auto_stop_minutes > MAX_AUTO_STOP_MINUTES {
            return Err(anyhow!(
                "auto_stop_minutes must be <= {}",
                MAX_AUTO_STOP_MINUTES
            ));
        }
        Ok(())
    }

    fn sanitize(&mut self) {
        self.selector.width = self.selector.width.clamp(1, MAX_SELECTION_DIMENSION);
        self.selector.height = self.selector.height.clamp(1, MAX_SELECTION_DIMENSION);

        if self
            .selector
            .display
            .as_ref()
            .is_some_and(|d| d.trim().is_empty() || d.len() > MAX_DISPLAY_NAME_LEN)
        {
            self.selector.display = None;
        }

        if !FRAME_RATES.contains(&self.recording.frame_rate) {
            self.recording.frame_rate = nearest_frame_rate(self.recording.frame_rate);
        }
        self.recording.countdown_secs = self.recording.countdown_secs.min(MAX_COUNTDOWN_SECS);
        self.recording.auto_stop_minutes =
            self.recording.auto_stop_minutes.min(MAX_AUTO_STOP_MINUTES);
    }
}

fn nearest_frame_rate(requested: u32) -> u32 {
    FRAME_RATES
        .iter()
        .copied()
        .min_by_key(|rate| rate.abs_diff(requested))
        .unwrap_or(DEFAULT_FRAME_RATE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector: SelectorConfig {
                width: 600,
                height: 450,
                remember_area: true,
                display: None,
            },
            recording: RecordingConfig {
                frame_rate: DEFAULT_FRAME_RATE,
                quality: VideoQuality::High,
                resolution: Resolution::High,
                show_cursor: true,
                record_mic: false,
                record_app_audio: true,
                background: Background::Wallpaper,
                countdown_secs: 0,
                auto_stop_minutes: 0,
            },
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "areapick", "areapick").map(|p| p.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                return Self::from_toml(&content);
            }
        }
        Ok(Config::default())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.sanitize();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.validate()?;
        if let Some(dir) = Self::config_dir() {
            fs::create_dir_all(&dir)?;
            if let Some(path) = Self::config_path() {
                let content = toml::to_string_pretty(self)?;
                fs::write(&path, content)?;
            }
        }
        Ok(())
    }
}
