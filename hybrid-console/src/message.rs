use hybrid_console_common::StatusSnapshot;

/// Messages for the Hybrid Console application.
#[derive(Debug, Clone)]
pub enum Message {
    /// User asked for a fresh snapshot.
    Refresh,

    /// A status load finished.
    StatusLoaded(Result<StatusSnapshot, String>),

    /// User pressed the reboot button.
    RequestReboot,

    /// User dismissed the reboot dialog.
    CancelReboot,

    /// User confirmed the reboot dialog.
    ConfirmReboot,

    /// The reboot command returned.
    RebootIssued(Result<(), String>),
}
