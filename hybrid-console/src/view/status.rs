//! Status view: backend mode, mount counters, mode distribution, system
//! info, partition activity and the reboot control.

use iced::widget::{Column, Row, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Theme};

use hybrid_console_common::{
    Dictionary, ModeDistribution, PartitionEntry, StatusSnapshot, count_mounted,
    display_partitions, resolve_mode_label, snapshot_distribution,
};

use crate::confirm::ConfirmGate;
use crate::message::Message;
use crate::view::components::{ConfirmDialog, ModeBar, PartitionChip, Skeleton};
use crate::view::icons::{self, IconSize};
use crate::view::theme;

/// Every value the status view displays, derived from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusViewModel {
    /// Whether a load is in flight (derived values render as placeholders).
    pub loading: bool,
    /// Localized backend mode label.
    pub mode_label: String,
    pub mount_base: String,
    /// Modules reporting a mount.
    pub mounted_count: usize,
    pub mountsource: String,
    pub distribution: ModeDistribution,
    /// Raw counters for the legend.
    pub auto_count: u64,
    pub magic_count: u64,
    pub kernel: String,
    pub selinux: String,
    pub partitions: Vec<PartitionEntry>,
    /// Error from the last load, if it failed.
    pub error: Option<String>,
}

impl StatusViewModel {
    /// Recompute every displayed value from the current store state.
    pub fn derive(
        snapshot: &StatusSnapshot,
        loading: bool,
        error: Option<&str>,
        dictionary: &Dictionary,
    ) -> Self {
        Self {
            loading,
            mode_label: resolve_mode_label(snapshot.storage_kind(), dictionary),
            mount_base: snapshot.mount_base().to_string(),
            mounted_count: count_mounted(snapshot.modules()),
            mountsource: snapshot.mountsource().to_string(),
            distribution: snapshot_distribution(snapshot),
            auto_count: snapshot.auto_count().unwrap_or(0),
            magic_count: snapshot.magic_count().unwrap_or(0),
            kernel: snapshot.kernel().to_string(),
            selinux: snapshot.selinux().to_string(),
            partitions: display_partitions(snapshot),
            error: error.map(str::to_string),
        }
    }
}

impl Default for StatusViewModel {
    fn default() -> Self {
        Self::derive(&StatusSnapshot::default(), false, None, &Dictionary::english())
    }
}

/// Render the status view, with the reboot dialog on top when it is open.
pub fn status_view<'a>(
    model: &'a StatusViewModel,
    gate: &ConfirmGate,
    dict: &Dictionary,
) -> Element<'a, Message> {
    let mut content = Column::new().spacing(16).padding(20);

    if let Some(error) = &model.error {
        content = content.push(render_error(error));
    }

    content = content
        .push(render_hero(model, dict))
        .push(render_metrics(model, dict))
        .push(render_mode_stats(model, dict))
        .push(render_system_info(model, dict))
        .push(render_actions(model, dict));

    let base = container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill);

    if gate.is_open() {
        ConfirmDialog::new(
            dict.text("common.rebootTitle", "Reboot System?"),
            dict.text(
                "common.rebootConfirm",
                "Are you sure you want to reboot the device?",
            ),
            Message::CancelReboot,
            Message::ConfirmReboot,
        )
        .with_labels(
            dict.text("common.cancel", "Cancel"),
            dict.text("common.reboot", "Reboot"),
        )
        .overlay(base)
    } else {
        base.into()
    }
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .padding(16)
        .style(theme::card)
        .into()
}

fn muted<'a>(label: String, size: u32) -> Element<'a, Message> {
    text(label)
        .size(size)
        .style(|t: &Theme| text::Style {
            color: Some(theme::colors(t).text_muted()),
        })
        .into()
}

/// Render the load error banner.
fn render_error(error: &str) -> Element<'_, Message> {
    let banner = row![
        icons::alert(IconSize::Medium),
        text(format!("Error: {}", error))
            .size(13)
            .style(|t: &Theme| text::Style {
                color: Some(theme::colors(t).danger()),
            }),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    card(banner)
}

/// Render the hero card: backend strategy and mount base.
fn render_hero<'a>(model: &'a StatusViewModel, dict: &Dictionary) -> Element<'a, Message> {
    if model.loading {
        return card(
            column![
                Skeleton::new(Length::Fixed(140.0), 24.0).view(),
                Skeleton::new(Length::Fixed(280.0), 48.0).view(),
                Skeleton::new(Length::Fixed(210.0), 20.0).view(),
            ]
            .spacing(10),
        );
    }

    let label = muted(dict.text("status.storageTitle", "Backend Strategy"), 13);
    let value = text(model.mode_label.as_str()).size(32);

    let chip = container(
        row![
            icons::mount_path(IconSize::Small),
            text(model.mount_base.as_str()).size(12),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .padding([4, 10])
    .style(|t: &Theme| container::Style {
        background: Some(iced::Background::Color(theme::colors(t).row_background())),
        border: iced::Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    card(column![label, value, chip].spacing(8))
}

/// Render the active-module and mount-source metric cards.
fn render_metrics<'a>(model: &'a StatusViewModel, dict: &Dictionary) -> Element<'a, Message> {
    let modules = metric_card(
        model.loading,
        icons::modules(IconSize::XLarge),
        model.mounted_count.to_string(),
        dict.text("status.moduleActive", "Active Modules"),
    );
    let source = metric_card(
        model.loading,
        icons::mount_source(IconSize::XLarge),
        model.mountsource.clone(),
        dict.text("config.mountSource", "Mount Source"),
    );

    row![modules, source].spacing(16).into()
}

fn metric_card<'a>(
    loading: bool,
    icon: Element<'a, Message>,
    value: String,
    label: String,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = if loading {
        Skeleton::new(Length::Fill, 32.0).view()
    } else {
        column![icon, text(value).size(28), muted(label, 12)]
            .spacing(6)
            .into()
    };

    container(content)
        .width(Length::FillPortion(1))
        .padding(16)
        .style(theme::card)
        .into()
}

/// Render the mode distribution bar and legend.
fn render_mode_stats<'a>(model: &'a StatusViewModel, dict: &Dictionary) -> Element<'a, Message> {
    let title = text(dict.text("status.modeStats", "Mode Distribution")).size(16);

    let body: Element<'a, Message> = if model.loading {
        Skeleton::new(Length::Fill, 24.0).with_radius(12.0).view()
    } else {
        let legend = row![
            legend_item(
                format!("Overlay: {}", model.auto_count),
                |t| theme::colors(t).primary()
            ),
            legend_item(
                format!("Magic: {}", model.magic_count),
                |t| theme::colors(t).magic()
            ),
        ]
        .spacing(20);

        column![ModeBar::new(model.distribution).view(), legend]
            .spacing(10)
            .into()
    };

    card(column![title, body].spacing(12))
}

fn legend_item<'a>(label: String, color: fn(&Theme) -> iced::Color) -> Element<'a, Message> {
    let dot = container(text(""))
        .width(Length::Fixed(10.0))
        .height(Length::Fixed(10.0))
        .style(move |t: &Theme| container::Style {
            background: Some(iced::Background::Color(color(t))),
            border: iced::Border {
                radius: 5.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    row![dot, text(label).size(12)]
        .spacing(6)
        .align_y(Alignment::Center)
        .into()
}

/// Render kernel, SELinux and the partition list.
fn render_system_info<'a>(model: &'a StatusViewModel, dict: &Dictionary) -> Element<'a, Message> {
    let title = text(dict.text("status.sysInfoTitle", "System Info")).size(16);

    let kernel = info_row(
        dict.text("status.kernel", "Kernel"),
        model.loading,
        &model.kernel,
        160.0,
    );
    let selinux = info_row(
        dict.text("status.selinux", "SELinux"),
        model.loading,
        &model.selinux,
        80.0,
    );

    let partitions_title = text(dict.text("status.activePartitions", "Partitions")).size(16);

    let partitions: Element<'a, Message> = if model.loading {
        Skeleton::new(Length::Fill, 32.0).view()
    } else {
        Row::with_children(
            model
                .partitions
                .iter()
                .map(|entry| PartitionChip::new(entry).view()),
        )
        .spacing(6)
        .wrap()
        .into()
    };

    card(column![title, kernel, selinux, partitions_title, partitions].spacing(10))
}

fn info_row<'a>(
    key: String,
    loading: bool,
    value: &'a str,
    placeholder_width: f32,
) -> Element<'a, Message> {
    let value: Element<'a, Message> = if loading {
        Skeleton::new(Length::Fixed(placeholder_width), 16.0).view()
    } else {
        text(value).size(13).into()
    };

    row![
        container(muted(key, 13)).width(Length::Fixed(100.0)),
        container(value).align_right(Length::Fill),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the reboot and refresh buttons.
fn render_actions<'a>(model: &'a StatusViewModel, dict: &Dictionary) -> Element<'a, Message> {
    let reboot = button(
        row![
            icons::power(IconSize::Medium),
            text(dict.text("status.rebootAction", "Reboot Device")).size(14),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .on_press(Message::RequestReboot)
    .style(button::secondary);

    let refresh = button(
        row![
            icons::refresh(IconSize::Medium),
            text(dict.text("logs.refresh", "Refresh")).size(14),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .on_press_maybe((!model.loading).then_some(Message::Refresh))
    .style(button::secondary);

    row![container(text("")).width(Length::Fill), reboot, refresh]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_derive_from_device_snapshot() {
        let dict = Dictionary::english().with("mode_tmpfs", "Tmpfs");
        let model = StatusViewModel::derive(&mock::snapshot::device(), false, None, &dict);

        assert_eq!(model.mode_label, "Tmpfs");
        assert_eq!(model.mount_base, "/debug_ramdisk");
        assert_eq!(model.mounted_count, 4);
        assert_eq!(model.mountsource, "KSU");
        assert_eq!(model.distribution.auto, 75.0);
        assert_eq!(model.distribution.magic, 25.0);
        assert_eq!(model.selinux, "Enforcing");
        assert_eq!(
            model.partitions.last().map(|p| p.name.as_str()),
            Some("my_custom")
        );
    }

    #[test]
    fn test_derive_from_empty_snapshot() {
        let model = StatusViewModel::default();

        assert_eq!(model.mode_label, "Unknown");
        assert_eq!(model.mount_base, "Unknown");
        assert_eq!(model.mounted_count, 0);
        assert_eq!(model.mountsource, "-");
        assert_eq!(model.kernel, "-");
        assert!(model.distribution.is_empty());
        assert!(model.partitions.iter().all(|p| !p.active));
    }

    #[test]
    fn test_derive_unlocalized_mode() {
        let mut snapshot = mock::snapshot::device();
        snapshot.storage = Some(hybrid_console_common::StorageInfo {
            kind: Some("erofs".to_string()),
        });

        let model = StatusViewModel::derive(&snapshot, false, None, &Dictionary::english());
        assert_eq!(model.mode_label, "EROFS");
    }
}
