//! Hybrid Console Iced application.

use iced::{Element, Task, Theme};

use hybrid_console_common::{ConsoleConfig, Dictionary, status_summary};

use crate::confirm::{ConfirmGate, GatedAction};
use crate::device::DeviceCommands;
use crate::message::Message;
use crate::source::StatusSource;
use crate::store::StatusStore;
use crate::view::status::{StatusViewModel, status_view};

/// Everything the application needs at boot.
#[derive(Debug, Clone)]
pub struct ConsoleSettings {
    pub source: StatusSource,
    pub commands: DeviceCommands,
    pub dictionary: Dictionary,
}

impl ConsoleSettings {
    /// Settings for the configured device.
    pub fn from_config(config: &ConsoleConfig, dictionary: Dictionary) -> Self {
        Self {
            source: StatusSource::device(config.device.clone()),
            commands: DeviceCommands::device(&config.device),
            dictionary,
        }
    }

    /// Settings for demo mode (mock data, no device).
    pub fn demo(dictionary: Dictionary) -> Self {
        Self {
            source: StatusSource::Demo,
            commands: DeviceCommands::Demo,
            dictionary,
        }
    }
}

/// The main Hybrid Console application.
pub struct HybridConsole {
    /// Where snapshots come from.
    source: StatusSource,
    /// Remote command interface.
    commands: DeviceCommands,
    /// Translations.
    dictionary: Dictionary,
    /// Latest snapshot and loading flag.
    store: StatusStore,
    /// Values shown by the view, recomputed on every store change.
    view_model: StatusViewModel,
    /// Reboot confirmation dialog.
    reboot_gate: ConfirmGate,
}

impl HybridConsole {
    /// Boot the application and start the initial status load.
    pub fn boot(settings: ConsoleSettings) -> (Self, Task<Message>) {
        let mut app = Self {
            source: settings.source,
            commands: settings.commands,
            dictionary: settings.dictionary,
            store: StatusStore::new(),
            view_model: StatusViewModel::default(),
            reboot_gate: ConfirmGate::new(),
        };

        let task = app.load_status();
        (app, task)
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        if self.store.loads() > 0 {
            format!("Hybrid Console - {}", status_summary(self.store.snapshot()))
        } else {
            "Hybrid Console".to_string()
        }
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Refresh => {
                return self.load_status();
            }

            Message::StatusLoaded(Ok(snapshot)) => {
                self.store.finish_load(snapshot);
                self.derive_view_model();
            }

            Message::StatusLoaded(Err(error)) => {
                tracing::warn!(error = %error, "Status load failed");
                self.store.fail_load(error);
                self.derive_view_model();
            }

            Message::RequestReboot => {
                self.reboot_gate.request_confirm(GatedAction::Reboot);
            }

            Message::CancelReboot => {
                self.reboot_gate.cancel();
            }

            Message::ConfirmReboot => {
                if let Some(GatedAction::Reboot) = self.reboot_gate.confirm() {
                    return self.reboot();
                }
            }

            Message::RebootIssued(Ok(())) => {
                tracing::info!("Reboot requested");
                return self.load_status();
            }

            Message::RebootIssued(Err(error)) => {
                tracing::error!(error = %error, "Reboot request failed");
            }
        }

        Task::none()
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        status_view(&self.view_model, &self.reboot_gate, &self.dictionary)
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Current store state.
    pub fn store(&self) -> &StatusStore {
        &self.store
    }

    /// Reboot confirmation gate.
    pub fn reboot_gate(&self) -> &ConfirmGate {
        &self.reboot_gate
    }

    /// Values currently displayed.
    pub fn view_model(&self) -> &StatusViewModel {
        &self.view_model
    }

    /// Start a status load unless one is already running.
    fn load_status(&mut self) -> Task<Message> {
        if !self.store.begin_load() {
            return Task::none();
        }
        self.derive_view_model();

        let source = self.source.clone();
        Task::perform(
            async move { source.fetch().await.map_err(|e| e.to_string()) },
            Message::StatusLoaded,
        )
    }

    /// Fire the reboot command. The result is only logged.
    fn reboot(&self) -> Task<Message> {
        let commands = self.commands.clone();
        Task::perform(
            async move { commands.reboot().await.map_err(|e| e.to_string()) },
            Message::RebootIssued,
        )
    }

    fn derive_view_model(&mut self) {
        self.view_model = StatusViewModel::derive(
            self.store.snapshot(),
            self.store.is_loading(),
            self.store.last_error(),
            &self.dictionary,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::ConfirmState;
    use crate::mock;

    fn booted() -> HybridConsole {
        let (app, _task) = HybridConsole::boot(ConsoleSettings::demo(Dictionary::english()));
        app
    }

    #[test]
    fn test_boot_starts_loading() {
        let app = booted();
        assert!(app.store().is_loading());
        assert!(app.view_model().loading);
        assert_eq!(app.title(), "Hybrid Console");
    }

    #[test]
    fn test_loaded_snapshot_is_derived() {
        let mut app = booted();
        let _ = app.update(Message::StatusLoaded(Ok(mock::snapshot::device())));

        assert!(!app.store().is_loading());
        assert!(!app.view_model().loading);
        assert_eq!(app.view_model().mounted_count, 4);
        assert_eq!(app.view_model().mode_label, "TMPFS");
        assert!(app.title().contains("Backend: tmpfs"));
    }

    #[test]
    fn test_failed_load_shows_error() {
        let mut app = booted();
        let _ = app.update(Message::StatusLoaded(Err("device offline".to_string())));

        assert!(!app.view_model().loading);
        assert_eq!(app.view_model().error.as_deref(), Some("device offline"));
    }

    #[test]
    fn test_refresh_keeps_dialog_open() {
        let mut app = booted();
        let _ = app.update(Message::StatusLoaded(Ok(mock::snapshot::device())));
        let _ = app.update(Message::RequestReboot);

        let _ = app.update(Message::Refresh);

        assert!(app.store().is_loading());
        assert!(app.reboot_gate().is_open());
    }

    #[test]
    fn test_reboot_dialog_flow() {
        let mut app = booted();

        let _ = app.update(Message::RequestReboot);
        assert_eq!(
            app.reboot_gate().state(),
            ConfirmState::Confirming(GatedAction::Reboot)
        );

        let _ = app.update(Message::CancelReboot);
        assert_eq!(app.reboot_gate().state(), ConfirmState::Idle);

        let _ = app.update(Message::RequestReboot);
        let _ = app.update(Message::ConfirmReboot);
        assert_eq!(app.reboot_gate().state(), ConfirmState::Idle);
    }

    #[test]
    fn test_reboot_command_only_after_confirm() {
        let mut app = booted();
        let _ = app.update(Message::StatusLoaded(Ok(mock::snapshot::device())));

        // Confirm without an open dialog issues nothing
        assert_eq!(app.update(Message::ConfirmReboot).units(), 0);

        // Opening and cancelling issues nothing
        assert_eq!(app.update(Message::RequestReboot).units(), 0);
        assert_eq!(app.update(Message::CancelReboot).units(), 0);

        // Confirming issues exactly one reboot
        let _ = app.update(Message::RequestReboot);
        assert_eq!(app.update(Message::ConfirmReboot).units(), 1);
        assert!(!app.reboot_gate().is_open());

        // A second confirm is a no-op
        assert_eq!(app.update(Message::ConfirmReboot).units(), 0);
    }

    #[test]
    fn test_reboot_failure_does_not_reopen_dialog() {
        let mut app = booted();
        let _ = app.update(Message::RebootIssued(Err("permission denied".to_string())));
        assert!(!app.reboot_gate().is_open());
    }
}
