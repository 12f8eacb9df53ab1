//! Status store: the current snapshot plus its loading flag.

use hybrid_console_common::StatusSnapshot;

/// Holds the latest snapshot and tracks in-flight loads.
#[derive(Debug, Clone, Default)]
pub struct StatusStore {
    snapshot: StatusSnapshot,
    loading: bool,
    last_error: Option<String>,
    loads: u64,
}

impl StatusStore {
    /// Create an empty, idle store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot (empty until the first successful load).
    pub fn snapshot(&self) -> &StatusSnapshot {
        &self.snapshot
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error from the most recent load, if it failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of completed successful loads.
    pub fn loads(&self) -> u64 {
        self.loads
    }

    /// Mark a load as started. Returns `false` if one is already running.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            tracing::debug!("Status load already in flight");
            return false;
        }
        self.loading = true;
        true
    }

    /// Replace the snapshot with a freshly loaded one.
    pub fn finish_load(&mut self, snapshot: StatusSnapshot) {
        self.snapshot = snapshot;
        self.loading = false;
        self.last_error = None;
        self.loads += 1;
    }

    /// Record a failed load. The previous snapshot is kept.
    pub fn fail_load(&mut self, error: String) {
        self.loading = false;
        self.last_error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hybrid_console_common::StorageInfo;

    fn tmpfs_snapshot() -> StatusSnapshot {
        StatusSnapshot {
            storage: Some(StorageInfo {
                kind: Some("tmpfs".to_string()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_cycle() {
        let mut store = StatusStore::new();
        assert!(!store.is_loading());

        assert!(store.begin_load());
        assert!(store.is_loading());
        assert!(!store.begin_load());

        store.finish_load(tmpfs_snapshot());
        assert!(!store.is_loading());
        assert_eq!(store.snapshot().storage_kind(), Some("tmpfs"));
        assert_eq!(store.loads(), 1);
    }

    #[test]
    fn test_failed_load_keeps_snapshot() {
        let mut store = StatusStore::new();
        store.begin_load();
        store.finish_load(tmpfs_snapshot());

        store.begin_load();
        store.fail_load("adb: no devices/emulators found".to_string());

        assert!(!store.is_loading());
        assert_eq!(store.last_error(), Some("adb: no devices/emulators found"));
        assert_eq!(store.snapshot().storage_kind(), Some("tmpfs"));

        store.begin_load();
        store.finish_load(StatusSnapshot::default());
        assert!(store.last_error().is_none());
    }
}
