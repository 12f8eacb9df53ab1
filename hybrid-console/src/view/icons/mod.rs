//! SVG icons for the Hybrid Console UI.
//!
//! All icons are embedded at compile time using `include_bytes!`.
//!
//! Two types of icons are available:
//! - Static icons: Standard SVG icons for cards and chips
//! - Animated icons: SVG icons that animate color on hover (for use in buttons)

use iced::widget::svg::Handle;
use iced::{Element, Length};

// Use iced_anim's animated SVG for hover effects
use iced_anim::widget::svg::Svg as AnimatedSvg;
// Keep standard SVG for static icons
use iced::widget::svg::Svg;

/// Icon size presets.
#[derive(Debug, Clone, Copy, Default)]
pub enum IconSize {
    /// Small icon (12px)
    Small,
    /// Medium icon (16px) - default
    #[default]
    Medium,
    /// Extra large icon (24px)
    XLarge,
}

impl IconSize {
    fn pixels(self) -> f32 {
        match self {
            IconSize::Small => 12.0,
            IconSize::Medium => 16.0,
            IconSize::XLarge => 24.0,
        }
    }
}

/// Create an SVG element from raw bytes.
fn svg_icon<Message: 'static>(data: &'static [u8], size: IconSize) -> Element<'static, Message> {
    let handle = Handle::from_memory(data);
    Svg::new(handle)
        .width(Length::Fixed(size.pixels()))
        .height(Length::Fixed(size.pixels()))
        .into()
}

/// Create an animated SVG element from raw bytes.
/// Animated icons smoothly transition colors on hover - ideal for use in buttons.
fn animated_svg_icon<Message: 'static>(
    data: &'static [u8],
    size: IconSize,
) -> Element<'static, Message> {
    let handle = Handle::from_memory(data);
    AnimatedSvg::new(handle)
        .width(Length::Fixed(size.pixels()))
        .height(Length::Fixed(size.pixels()))
        .into()
}

// ============================================================================
// Status Icons
// ============================================================================

/// Folder (mount base chip).
pub fn mount_path<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("mount_path.svg"), size)
}

/// Puzzle piece (active modules metric).
pub fn modules<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("modules.svg"), size)
}

/// Shield (mount source metric).
pub fn mount_source<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("mount_source.svg"), size)
}

/// Warning triangle (load errors).
pub fn alert<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    svg_icon(include_bytes!("alert.svg"), size)
}

// ============================================================================
// Action Icons (animated)
// ============================================================================

/// Power (reboot button).
pub fn power<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    animated_svg_icon(include_bytes!("power.svg"), size)
}

/// Circular arrow (refresh button).
pub fn refresh<Message: 'static>(size: IconSize) -> Element<'static, Message> {
    animated_svg_icon(include_bytes!("refresh.svg"), size)
}
