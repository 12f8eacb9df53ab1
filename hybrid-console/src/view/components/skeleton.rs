//! Loading placeholder block.

use iced::widget::{container, text};
use iced::{Element, Length, Theme};

use crate::view::theme;

/// A rounded gray block shown in place of a value while it loads.
pub struct Skeleton {
    width: Length,
    height: f32,
    radius: f32,
}

impl Skeleton {
    /// Create a placeholder of the given size.
    pub fn new(width: impl Into<Length>, height: f32) -> Self {
        Self {
            width: width.into(),
            height,
            radius: 6.0,
        }
    }

    /// Set the corner radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Render the placeholder as an Iced element.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let radius = self.radius;
        container(text(""))
            .width(self.width)
            .height(Length::Fixed(self.height))
            .style(move |t: &Theme| container::Style {
                background: Some(iced::Background::Color(theme::colors(t).skeleton())),
                border: iced::Border {
                    radius: radius.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    }
}
