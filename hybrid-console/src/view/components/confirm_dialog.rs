//! Modal confirmation dialog.

use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text};
use iced::{Element, Length, Theme};

use crate::view::theme;

/// Headline, body and two actions of a confirmation dialog.
pub struct ConfirmDialog<Message> {
    title: String,
    body: String,
    cancel_label: String,
    confirm_label: String,
    on_cancel: Message,
    on_confirm: Message,
}

impl<Message: Clone + 'static> ConfirmDialog<Message> {
    /// Create a dialog with the given texts and messages.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        on_cancel: Message,
        on_confirm: Message,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            cancel_label: "Cancel".to_string(),
            confirm_label: "OK".to_string(),
            on_cancel,
            on_confirm,
        }
    }

    /// Set the action button labels.
    pub fn with_labels(mut self, cancel: impl Into<String>, confirm: impl Into<String>) -> Self {
        self.cancel_label = cancel.into();
        self.confirm_label = confirm.into();
        self
    }

    /// Render `base` with the dialog on top of it.
    ///
    /// Clicking the scrim outside the dialog cancels.
    pub fn overlay<'a>(self, base: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
        let base: Element<'a, Message> = base.into();
        let on_blur = self.on_cancel.clone();

        let actions = row![
            button(text(self.cancel_label).size(14))
                .on_press(self.on_cancel)
                .style(button::text),
            button(text(self.confirm_label).size(14))
                .on_press(self.on_confirm)
                .style(button::danger),
        ]
        .spacing(8);

        let dialog = container(
            column![
                text(self.title).size(20),
                text(self.body).size(14),
                container(actions).align_right(Length::Fill),
            ]
            .spacing(16),
        )
        .width(Length::Fixed(360.0))
        .padding(24)
        .style(theme::card);

        stack![
            base,
            opaque(
                mouse_area(center(opaque(dialog)).style(|t: &Theme| container::Style {
                    background: Some(iced::Background::Color(theme::colors(t).scrim())),
                    ..Default::default()
                }))
                .on_press(on_blur)
            )
        ]
        .into()
    }
}
