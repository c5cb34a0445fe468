//! Hand-off to the recording subsystem once an area is confirmed.

mod countdown;

pub use countdown::{Countdown, PressOutcome, TickOutcome, TICK_INTERVAL};

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;

use crate::config::{Background, RecordingConfig, Resolution, VideoQuality};
use crate::display::DisplayInfo;
use crate::selection::SelectionRect;

/// Padding between the recorded area and the dashed outline shown while
/// recording.
pub const OUTLINE_PADDING: f64 = 5.0;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("No display to record from")]
    NoDisplay,

    #[error("No capture area selected")]
    NoArea,

    #[error("Failed to encode recording request: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordingSettings {
    pub fps: u32,
    pub quality: f64,
    pub scale: Option<f64>,
    pub show_cursor: bool,
    pub record_mic: bool,
    pub record_app_audio: bool,
    pub background: Background,
    /// Stop automatically after this many minutes; 0 disables.
    pub auto_stop_minutes: u32,
}

impl From<&RecordingConfig> for RecordingSettings {
    fn from(config: &RecordingConfig) -> Self {
        Self {
            fps: config.frame_rate,
            quality: config.quality.factor(),
            scale: config.resolution.scale(),
            show_cursor: config.show_cursor,
            record_mic: config.record_mic,
            record_app_audio: config.record_app_audio,
            background: config.background,
            auto_stop_minutes: config.auto_stop_minutes,
        }
    }
}

impl Default for RecordingSettings {
    fn default() -> Self {
        Self {
            fps: 60,
            quality: VideoQuality::High.factor(),
            scale: Resolution::High.scale(),
            show_cursor: true,
            record_mic: false,
            record_app_audio: true,
            background: Background::Wallpaper,
            auto_stop_minutes: 0,
        }
    }
}

/// "Record this area on this display", as handed to the recorder.
#[derive(Debug, Clone, Serialize)]
pub struct RecordingRequest {
    pub display: DisplayInfo,
    /// Area in display-local coordinates.
    pub area: SelectionRect,
    /// Area in desktop coordinates (y-down).
    pub global_area: SelectionRect,
    /// Frame of the dashed outline drawn around the area while recording.
    pub outline: SelectionRect,
    pub settings: RecordingSettings,
    pub requested_at: DateTime<Local>,
}

impl RecordingRequest {
    pub fn prepare(
        display: Option<&DisplayInfo>,
        area: Option<SelectionRect>,
        settings: RecordingSettings,
    ) -> Result<Self, RecordError> {
        let display = display.ok_or(RecordError::NoDisplay)?;
        let area = area.ok_or(RecordError::NoArea)?;
        let global_area = display.to_global(&area);

        Ok(Self {
            display: display.clone(),
            area,
            global_area,
            outline: global_area.inflate(OUTLINE_PADDING),
            settings,
            requested_at: Local::now(),
        })
    }

    /// Single-line JSON form written for the recorder process.
    pub fn to_json_line(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn display() -> DisplayInfo {
        DisplayInfo {
            id: 3,
            name: "DELL U2720Q".to_string(),
            x: 1440,
            y: 0,
            width: 2560,
            height: 1440,
            is_primary: false,
        }
    }

    #[test]
    fn test_missing_display_is_fatal() {
        let area = Some(SelectionRect::new(0.0, 0.0, 100.0, 100.0));
        let result = RecordingRequest::prepare(None, area, RecordingSettings::default());
        assert!(matches!(result, Err(RecordError::NoDisplay)));
    }

    #[test]
    fn test_missing_area_is_fatal() {
        let result = RecordingRequest::prepare(Some(&display()), None, RecordingSettings::default());
        assert!(matches!(result, Err(RecordError::NoArea)));
    }

    #[test]
    fn test_bottom_strip_is_recorded_at_bottom() {
        let area = SelectionRect::new(0.0, 0.0, 2560.0, 100.0);
        let request =
            RecordingRequest::prepare(Some(&display()), Some(area), RecordingSettings::default())
                .unwrap();
        assert_eq!(request.area, area);
        assert_eq!(request.global_area, SelectionRect::new(1440.0, 1340.0, 2560.0, 100.0));
        assert_eq!(request.outline, SelectionRect::new(1435.0, 1335.0, 2570.0, 110.0));
    }

    #[test]
    fn test_top_strip_is_recorded_at_top() {
        let area = SelectionRect::new(200.0, 1340.0, 600.0, 100.0);
        let request =
            RecordingRequest::prepare(Some(&display()), Some(area), RecordingSettings::default())
                .unwrap();
        assert_eq!(request.global_area, SelectionRect::new(1640.0, 0.0, 600.0, 100.0));
        assert_eq!(request.outline, SelectionRect::new(1635.0, -5.0, 610.0, 110.0));
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = Config::default();
        config.recording.quality = VideoQuality::Low;
        config.recording.resolution = Resolution::Low;
        config.recording.frame_rate = 30;
        let settings = RecordingSettings::from(&config.recording);
        assert_eq!(settings.fps, 30);
        assert_eq!(settings.quality, 0.3);
        assert_eq!(settings.scale, Some(0.5));
    }

    #[test]
    fn test_json_line() {
        let area = SelectionRect::new(1.0, 2.0, 30.0, 40.0);
        let request =
            RecordingRequest::prepare(Some(&display()), Some(area), RecordingSettings::default())
                .unwrap();
        let line = request.to_json_line().unwrap();
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["display"]["name"], "DELL U2720Q");
        assert_eq!(value["area"]["width"], 30.0);
        assert_eq!(value["settings"]["fps"], 60);
    }
}
