//! Confirmation gate for destructive device actions.
//!
//! An action can only be released through [`ConfirmGate::confirm`] while the
//! gate is confirming it. There is no path from `Idle` to a released action.

/// Actions that require explicit confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatedAction {
    Reboot,
}

/// Gate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmState {
    #[default]
    Idle,
    /// Dialog open, waiting for the user to confirm or cancel.
    Confirming(GatedAction),
}

/// Two-state confirm/cancel machine. Reusable for the life of the view.
#[derive(Debug, Clone, Default)]
pub struct ConfirmGate {
    state: ConfirmState,
}

impl ConfirmGate {
    /// Create an idle gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> ConfirmState {
        self.state
    }

    /// Whether the confirmation dialog is visible.
    pub fn is_open(&self) -> bool {
        matches!(self.state, ConfirmState::Confirming(_))
    }

    /// Action awaiting confirmation, if any.
    pub fn pending(&self) -> Option<GatedAction> {
        match self.state {
            ConfirmState::Confirming(action) => Some(action),
            ConfirmState::Idle => None,
        }
    }

    /// Open the dialog for `action`. Ignored if a confirmation is already open.
    pub fn request_confirm(&mut self, action: GatedAction) {
        if self.state == ConfirmState::Idle {
            tracing::debug!(?action, "Awaiting confirmation");
            self.state = ConfirmState::Confirming(action);
        }
    }

    /// Close the dialog without releasing anything.
    pub fn cancel(&mut self) {
        if let ConfirmState::Confirming(action) = self.state {
            tracing::debug!(?action, "Confirmation cancelled");
        }
        self.state = ConfirmState::Idle;
    }

    /// Close the dialog and release the pending action.
    ///
    /// Returns `None` (and does nothing) when the gate is idle.
    pub fn confirm(&mut self) -> Option<GatedAction> {
        let action = self.pending()?;
        tracing::debug!(?action, "Action confirmed");
        self.state = ConfirmState::Idle;
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let gate = ConfirmGate::new();
        assert_eq!(gate.state(), ConfirmState::Idle);
        assert!(!gate.is_open());
    }

    #[test]
    fn test_request_then_cancel() {
        let mut gate = ConfirmGate::new();
        let mut issued = 0;

        gate.request_confirm(GatedAction::Reboot);
        assert_eq!(gate.state(), ConfirmState::Confirming(GatedAction::Reboot));
        assert!(gate.is_open());

        gate.cancel();
        assert_eq!(gate.state(), ConfirmState::Idle);

        // Cancel never releases, and a later confirm has nothing to release
        if gate.confirm().is_some() {
            issued += 1;
        }
        assert_eq!(issued, 0);
    }

    #[test]
    fn test_request_then_confirm() {
        let mut gate = ConfirmGate::new();

        gate.request_confirm(GatedAction::Reboot);
        assert_eq!(gate.confirm(), Some(GatedAction::Reboot));
        assert_eq!(gate.state(), ConfirmState::Idle);

        // Exactly one release per confirmation
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn test_confirm_while_idle_is_noop() {
        let mut gate = ConfirmGate::new();
        assert_eq!(gate.confirm(), None);
        assert_eq!(gate.state(), ConfirmState::Idle);
    }

    #[test]
    fn test_cancel_while_idle_is_noop() {
        let mut gate = ConfirmGate::new();
        gate.cancel();
        assert_eq!(gate.state(), ConfirmState::Idle);
    }

    #[test]
    fn test_gate_is_reusable() {
        let mut gate = ConfirmGate::new();

        for _ in 0..3 {
            gate.request_confirm(GatedAction::Reboot);
            gate.request_confirm(GatedAction::Reboot);
            assert_eq!(gate.confirm(), Some(GatedAction::Reboot));
            assert!(!gate.is_open());
        }
    }
}
