//! Partition name chip, highlighted when the partition carries a mount.

use iced::widget::{container, text};
use iced::{Element, Theme};

use hybrid_console_common::PartitionEntry;

use crate::view::theme;

/// A small rounded label for one partition.
pub struct PartitionChip<'a> {
    entry: &'a PartitionEntry,
}

impl<'a> PartitionChip<'a> {
    pub fn new(entry: &'a PartitionEntry) -> Self {
        Self { entry }
    }

    /// Render the chip as an Iced element.
    pub fn view<Message: 'a>(self) -> Element<'a, Message> {
        let active = self.entry.active;

        let label = text(self.entry.name.as_str())
            .size(12)
            .style(move |t: &Theme| text::Style {
                color: Some(if active {
                    theme::colors(t).primary_text()
                } else {
                    theme::colors(t).text_muted()
                }),
            });

        container(label)
            .padding([4, 10])
            .style(move |t: &Theme| {
                let c = theme::colors(t);
                container::Style {
                    background: Some(iced::Background::Color(if active {
                        c.primary()
                    } else {
                        c.row_background()
                    })),
                    border: iced::Border {
                        color: c.border(),
                        width: if active { 0.0 } else { 1.0 },
                        radius: 8.0.into(),
                    },
                    ..Default::default()
                }
            })
            .into()
    }
}
