//! Two-segment bar for the overlay/magic mode distribution.

use iced::widget::{Row, container, text};
use iced::{Element, Length, Theme};

use hybrid_console_common::ModeDistribution;

use crate::view::theme;

/// Fill portions (per mille) for the auto and magic segments.
///
/// Each segment is scaled independently, mirroring the distribution itself.
pub fn segment_portions(distribution: &ModeDistribution) -> (u16, u16) {
    let scale = |percent: f64| (percent.clamp(0.0, 100.0) * 10.0).round() as u16;
    (scale(distribution.auto), scale(distribution.magic))
}

/// Horizontal stacked bar.
pub struct ModeBar {
    distribution: ModeDistribution,
    height: f32,
}

impl ModeBar {
    /// Create a bar for the given distribution.
    pub fn new(distribution: ModeDistribution) -> Self {
        Self {
            distribution,
            height: 24.0,
        }
    }

    /// Render the bar as an Iced element.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let (auto, magic) = segment_portions(&self.distribution);
        let height = self.height;

        let segment = move |portion: u16, color: fn(&Theme) -> iced::Color| -> Element<'a, Message> {
            container(text(""))
                .width(Length::FillPortion(portion))
                .height(Length::Fixed(height))
                .style(move |t: &Theme| container::Style {
                    background: Some(iced::Background::Color(color(t))),
                    ..Default::default()
                })
                .into()
        };

        let mut bar = Row::new().width(Length::Fill);
        if auto > 0 {
            bar = bar.push(segment(auto, |t| theme::colors(t).primary()));
        }
        if magic > 0 {
            bar = bar.push(segment(magic, |t| theme::colors(t).magic()));
        }

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .clip(true)
            .style(move |t: &Theme| container::Style {
                background: Some(iced::Background::Color(theme::colors(t).row_background())),
                border: iced::Border {
                    radius: (height / 2.0).into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    }
}
