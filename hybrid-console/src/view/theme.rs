//! Theme-aware color palette for Hybrid Console.
//!
//! Semantic colors that adapt to the current theme. Use these instead of
//! hardcoded `Color::from_rgb()` values in views.

use iced::{Color, Theme};

/// Colors derived from the theme's extended palette.
pub struct ThemeColors<'a> {
    theme: &'a Theme,
}

impl<'a> ThemeColors<'a> {
    /// Create a new ThemeColors from a theme reference.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn palette(&self) -> &iced::theme::palette::Extended {
        self.theme.extended_palette()
    }

    // ========================================================================
    // Text Colors
    // ========================================================================

    /// Muted/secondary text color.
    pub fn text_muted(&self) -> Color {
        self.palette().background.weak.text
    }

    // ========================================================================
    // Accent Colors
    // ========================================================================

    /// Primary accent (overlay segment, active partitions).
    pub fn primary(&self) -> Color {
        self.palette().primary.base.color
    }

    /// Text on the primary accent.
    pub fn primary_text(&self) -> Color {
        self.palette().primary.base.text
    }

    /// Magic-mount segment color.
    pub fn magic(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.85, 0.6, 0.95)
        } else {
            Color::from_rgb(0.55, 0.3, 0.7)
        }
    }

    /// Danger/error color (red).
    pub fn danger(&self) -> Color {
        self.palette().danger.base.color
    }

    // ========================================================================
    // Surfaces
    // ========================================================================

    /// Card background color.
    pub fn card_background(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.12, 0.12, 0.14)
        } else {
            Color::from_rgb(1.0, 1.0, 1.0)
        }
    }

    /// Chip and bar track background.
    pub fn row_background(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.17, 0.17, 0.2)
        } else {
            Color::from_rgb(0.93, 0.93, 0.95)
        }
    }

    /// Loading placeholder color.
    pub fn skeleton(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.22, 0.22, 0.25)
        } else {
            Color::from_rgb(0.88, 0.88, 0.9)
        }
    }

    /// Dialog scrim behind modal content.
    pub fn scrim(&self) -> Color {
        Color {
            a: 0.6,
            ..Color::BLACK
        }
    }

    /// Default border color.
    pub fn border(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.25, 0.25, 0.3)
        } else {
            Color::from_rgb(0.8, 0.8, 0.82)
        }
    }

    /// Check if the current theme is dark.
    pub fn is_dark(&self) -> bool {
        self.palette().is_dark
    }
}

/// Convenience function to create ThemeColors.
pub fn colors(theme: &Theme) -> ThemeColors<'_> {
    ThemeColors::new(theme)
}

/// Container style shared by every dashboard card.
pub fn card(theme: &Theme) -> iced::widget::container::Style {
    let c = colors(theme);
    iced::widget::container::Style {
        background: Some(iced::Background::Color(c.card_background())),
        border: iced::Border {
            color: c.border(),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}
