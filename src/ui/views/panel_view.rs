use iced::widget::{button, checkbox, column, container, pick_list, row, text, text_input, Space};
use iced::{Alignment, Element};

use crate::config::{Background, RecordingConfig, Resolution, VideoQuality, FRAME_RATES};
use crate::overlay::SizeFields;
use crate::recording::Countdown;
use crate::ui::style::{
    panel_container_style, record_button_style, tile_button_hovered_style, tile_button_style,
    MonochromeTheme,
};
use crate::ui::Message;

/// Control strip shown over the overlay: size entry, recording options, the
/// auto-stop field and the Cancel/Start buttons.
pub struct PanelView;

impl PanelView {
    pub fn view<'a>(
        theme: &MonochromeTheme,
        fields: &'a SizeFields,
        recording: &RecordingConfig,
        auto_stop_text: &'a str,
        countdown: &Countdown,
    ) -> Element<'a, Message> {
        let size_inputs = column![
            row![
                text("W").size(12),
                text_input("600", fields.width_text())
                    .on_input(Message::WidthChanged)
                    .width(70)
                    .size(12),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
            row![
                text("H").size(12),
                text_input("450", fields.height_text())
                    .on_input(Message::HeightChanged)
                    .width(70)
                    .size(12),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        ]
        .spacing(6);

        let pickers = column![
            row![
                text("Resolution").size(12).width(70),
                pick_list(
                    Resolution::all(),
                    Some(recording.resolution),
                    Message::ResolutionSelected
                )
                .text_size(12),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
            row![
                text("Frame rate").size(12).width(70),
                pick_list(
                    FRAME_RATES,
                    Some(recording.frame_rate),
                    Message::FrameRateSelected
                )
                .text_size(12),
                text("FPS").size(12),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        ]
        .spacing(6);

        let look = column![
            row![
                text("Quality").size(12).width(70),
                pick_list(
                    VideoQuality::all(),
                    Some(recording.quality),
                    Message::QualitySelected
                )
                .text_size(12),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
            row![
                text("Background").size(12).width(70),
                pick_list(
                    Background::all(),
                    Some(recording.background),
                    Message::BackgroundSelected
                )
                .text_size(12),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        ]
        .spacing(6);

        let toggles = column![
            checkbox("Record Cursor", recording.show_cursor)
                .on_toggle(Message::ShowCursorToggled)
                .text_size(12),
            checkbox("App's Audio", recording.record_app_audio)
                .on_toggle(Message::AppAudioToggled)
                .text_size(12),
            checkbox("Microphone", recording.record_mic)
                .on_toggle(Message::MicrophoneToggled)
                .text_size(12),
        ]
        .spacing(6);

        let auto_stop = row![
            text("Stop after").size(12),
            text_input("0", auto_stop_text)
                .on_input(Message::AutoStopChanged)
                .width(50)
                .size(12),
            text("min").size(12),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        let cancel = Self::action_button(theme, "Cancel", Message::Cancel);

        let record_style = record_button_style(theme, false);
        let record_hover = record_button_style(theme, true);
        let start = button(text(countdown.label()).size(13))
            .padding([10, 18])
            .style(move |_t, status| match status {
                button::Status::Hovered | button::Status::Pressed => record_hover,
                _ => record_style,
            })
            .on_press(Message::StartPressed);

        let content = row![
            cancel,
            Space::with_width(12),
            size_inputs,
            Space::with_width(12),
            pickers,
            Space::with_width(12),
            look,
            Space::with_width(12),
            toggles,
            Space::with_width(12),
            auto_stop,
            Space::with_width(12),
            start,
        ]
        .spacing(8)
        .padding(12)
        .align_y(Alignment::Center);

        let style = panel_container_style(theme);
        container(content).style(move |_| style).into()
    }

    fn action_button(
        theme: &MonochromeTheme,
        label: &str,
        message: Message,
    ) -> Element<'static, Message> {
        let normal_style = tile_button_style(theme);
        let hover_style = tile_button_hovered_style(theme);
        let label_owned = label.to_string();

        button(text(label_owned).size(13))
            .padding([10, 18])
            .style(move |_t, status| {
                if matches!(status, button::Status::Hovered | button::Status::Pressed) {
                    hover_style
                } else {
                    normal_style
                }
            })
            .on_press(message)
            .into()
    }
}
