//! Status snapshot read model.
//!
//! A [`StatusSnapshot`] is one fetched, read-only view of device status. Every
//! field is optional: a device may run an older daemon, a command may fail, or
//! a piece may simply not be loaded yet. Accessors return documented fallbacks
//! instead of panicking.

use serde::{Deserialize, Serialize};

/// Placeholder shown for absent text values.
pub const MISSING: &str = "-";

/// Placeholder shown for an absent mount base.
pub const UNKNOWN: &str = "Unknown";

/// One fetched view of device status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    /// Active storage backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageInfo>,

    /// Kernel and security information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_info: Option<SystemInfo>,

    /// Installed modules, in daemon order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<ModuleInfo>>,

    /// Daemon configuration relevant to the status view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<MountConfig>,

    /// Per-mode module counters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_stats: Option<ModeStats>,

    /// Partitions that currently carry a daemon mount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_partitions: Option<Vec<String>>,

    /// Whether the nuke (ext4 sysfs hiding) step ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuke_active: Option<bool>,
}

/// Storage backend descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageInfo {
    /// Raw backend mode identifier ("tmpfs", "ext4", "erofs", ...).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Kernel and security information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    #[serde(default)]
    pub kernel: Option<String>,
    #[serde(default)]
    pub selinux: Option<String>,
    #[serde(default)]
    pub mount_base: Option<String>,
}

/// A module as reported by the daemon's `modules` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    /// Default mount mode ("auto", "magic", "hymofs", "ignore").
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub is_mounted: bool,
}

impl ModuleInfo {
    /// Create a module entry with just an id and mount flag.
    pub fn new(id: impl Into<String>, is_mounted: bool) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            is_mounted,
            ..Default::default()
        }
    }
}

/// Daemon configuration fields the status view reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountConfig {
    /// Extra partitions configured on top of the builtin set.
    #[serde(default)]
    pub partitions: Option<Vec<String>>,
    /// Mount source name shown to the root manager ("KSU", "APatch", ...).
    #[serde(default)]
    pub mountsource: Option<String>,
}

/// Raw per-mode module counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeStats {
    #[serde(default)]
    pub auto: Option<u64>,
    #[serde(default)]
    pub magic: Option<u64>,
    /// HymoFS-mounted modules. Not part of the overlay/magic distribution.
    #[serde(default)]
    pub hymo: Option<u64>,
}

impl StatusSnapshot {
    /// Raw backend mode, if reported.
    pub fn storage_kind(&self) -> Option<&str> {
        self.storage.as_ref()?.kind.as_deref()
    }

    /// Kernel release, or [`MISSING`].
    pub fn kernel(&self) -> &str {
        non_empty(self.system_info.as_ref().and_then(|s| s.kernel.as_deref())).unwrap_or(MISSING)
    }

    /// SELinux mode, or [`MISSING`].
    pub fn selinux(&self) -> &str {
        non_empty(self.system_info.as_ref().and_then(|s| s.selinux.as_deref())).unwrap_or(MISSING)
    }

    /// Mount base directory, or [`UNKNOWN`].
    pub fn mount_base(&self) -> &str {
        non_empty(self.system_info.as_ref().and_then(|s| s.mount_base.as_deref()))
            .unwrap_or(UNKNOWN)
    }

    /// Configured mount source, or [`MISSING`].
    pub fn mountsource(&self) -> &str {
        non_empty(self.config.as_ref().and_then(|c| c.mountsource.as_deref())).unwrap_or(MISSING)
    }

    /// Dynamically configured partitions, if any.
    pub fn dynamic_partitions(&self) -> Option<&[String]> {
        self.config.as_ref()?.partitions.as_deref()
    }

    /// Module collection, if loaded.
    pub fn modules(&self) -> Option<&[ModuleInfo]> {
        self.modules.as_deref()
    }

    /// Raw auto (overlay) counter.
    pub fn auto_count(&self) -> Option<u64> {
        self.mode_stats.and_then(|s| s.auto)
    }

    /// Raw magic-mount counter.
    pub fn magic_count(&self) -> Option<u64> {
        self.mode_stats.and_then(|s| s.magic)
    }

    /// HymoFS-mounted module count, if reported.
    pub fn hymo_count(&self) -> Option<u64> {
        self.mode_stats.and_then(|s| s.hymo)
    }

    /// Whether `partition` currently carries a mount. Absent list means inactive.
    pub fn is_partition_active(&self, partition: &str) -> bool {
        self.active_partitions
            .as_ref()
            .is_some_and(|active| active.iter().any(|p| p == partition))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// The daemon's runtime state file (`daemon_state.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonState {
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub pid: u32,
    #[serde(default)]
    pub storage_mode: String,
    #[serde(default)]
    pub mount_point: String,
    #[serde(default)]
    pub overlay_modules: Vec<String>,
    #[serde(default)]
    pub magic_modules: Vec<String>,
    #[serde(default)]
    pub hymo_modules: Vec<String>,
    #[serde(default)]
    pub nuke_active: bool,
    #[serde(default)]
    pub active_mounts: Vec<String>,
}

impl DaemonState {
    /// Copy the fields the status view needs into `snapshot`.
    ///
    /// Empty strings in the state file are treated as absent.
    pub fn apply_to(&self, snapshot: &mut StatusSnapshot) {
        if !self.storage_mode.is_empty() {
            snapshot.storage = Some(StorageInfo {
                kind: Some(self.storage_mode.clone()),
            });
        }

        if !self.mount_point.is_empty() {
            snapshot
                .system_info
                .get_or_insert_with(SystemInfo::default)
                .mount_base = Some(self.mount_point.clone());
        }

        snapshot.mode_stats = Some(ModeStats {
            auto: Some(self.overlay_modules.len() as u64),
            magic: Some(self.magic_modules.len() as u64),
            hymo: Some(self.hymo_modules.len() as u64),
        });
        snapshot.active_partitions = Some(self.active_mounts.clone());
        snapshot.nuke_active = Some(self.nuke_active);
    }
}

/// One-line status summary in the daemon's module description format.
///
/// `Status: [Overlay: 3 | Magic: 1 | Hymo: 0] | Backend: tmpfs | Nuke: Inactive`
pub fn status_summary(snapshot: &StatusSnapshot) -> String {
    let nuke = if snapshot.nuke_active.unwrap_or(false) {
        "Active"
    } else {
        "Inactive"
    };
    format!(
        "Status: [Overlay: {} | Magic: {} | Hymo: {}] | Backend: {} | Nuke: {}",
        snapshot.auto_count().unwrap_or(0),
        snapshot.magic_count().unwrap_or(0),
        snapshot.hymo_count().unwrap_or(0),
        snapshot.storage_kind().unwrap_or(UNKNOWN),
        nuke
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_fallbacks() {
        let snapshot = StatusSnapshot::default();

        assert_eq!(snapshot.storage_kind(), None);
        assert_eq!(snapshot.kernel(), MISSING);
        assert_eq!(snapshot.selinux(), MISSING);
        assert_eq!(snapshot.mount_base(), UNKNOWN);
        assert_eq!(snapshot.mountsource(), MISSING);
        assert!(snapshot.dynamic_partitions().is_none());
        assert!(snapshot.modules().is_none());
        assert_eq!(snapshot.auto_count(), None);
        assert!(!snapshot.is_partition_active("system"));
    }

    #[test]
    fn test_empty_strings_fall_back() {
        let snapshot = StatusSnapshot {
            system_info: Some(SystemInfo {
                kernel: Some(String::new()),
                selinux: Some("Enforcing".to_string()),
                mount_base: Some(String::new()),
            }),
            ..Default::default()
        };

        assert_eq!(snapshot.kernel(), MISSING);
        assert_eq!(snapshot.selinux(), "Enforcing");
        assert_eq!(snapshot.mount_base(), UNKNOWN);
    }

    #[test]
    fn test_parse_store_json() {
        let json = r#"{
            "storage": { "type": "tmpfs" },
            "systemInfo": { "kernel": "5.15.123-android14", "selinux": "Enforcing", "mountBase": "/debug_ramdisk" },
            "modules": [
                { "id": "a", "is_mounted": true },
                { "id": "b" }
            ],
            "config": { "partitions": ["my_custom"], "mountsource": "KSU" },
            "modeStats": { "auto": 3 },
            "activePartitions": ["system", "vendor"]
        }"#;

        let snapshot: StatusSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.storage_kind(), Some("tmpfs"));
        assert_eq!(snapshot.kernel(), "5.15.123-android14");
        assert_eq!(snapshot.mount_base(), "/debug_ramdisk");
        assert_eq!(snapshot.mountsource(), "KSU");
        assert_eq!(snapshot.modules().map(<[_]>::len), Some(2));
        assert!(!snapshot.modules().unwrap()[1].is_mounted);
        assert_eq!(snapshot.auto_count(), Some(3));
        assert_eq!(snapshot.magic_count(), None);
        assert!(snapshot.is_partition_active("vendor"));
        assert!(!snapshot.is_partition_active("odm"));
    }

    #[test]
    fn test_null_storage_type() {
        let snapshot: StatusSnapshot = serde_json::from_str(r#"{"storage":{"type":null}}"#).unwrap();
        assert_eq!(snapshot.storage_kind(), None);
    }

    #[test]
    fn test_daemon_state_apply() {
        let state: DaemonState = serde_json::from_str(
            r#"{
                "timestamp": 1760000000,
                "pid": 812,
                "storage_mode": "ext4",
                "mount_point": "/mnt/vendor/meta-hybrid",
                "overlay_modules": ["a", "b"],
                "magic_modules": ["c"],
                "hymo_modules": ["d", "e"],
                "nuke_active": true
            }"#,
        )
        .unwrap();

        let mut snapshot = StatusSnapshot::default();
        state.apply_to(&mut snapshot);

        assert_eq!(snapshot.storage_kind(), Some("ext4"));
        assert_eq!(snapshot.mount_base(), "/mnt/vendor/meta-hybrid");
        assert_eq!(snapshot.auto_count(), Some(2));
        assert_eq!(snapshot.magic_count(), Some(1));
        assert_eq!(snapshot.hymo_count(), Some(2));
        assert_eq!(snapshot.active_partitions, Some(vec![]));
        assert_eq!(snapshot.nuke_active, Some(true));
    }

    #[test]
    fn test_daemon_state_keeps_kernel() {
        let mut snapshot = StatusSnapshot {
            system_info: Some(SystemInfo {
                kernel: Some("6.1.0".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let state = DaemonState {
            mount_point: "/debug_ramdisk".to_string(),
            ..Default::default()
        };

        state.apply_to(&mut snapshot);

        assert_eq!(snapshot.kernel(), "6.1.0");
        assert_eq!(snapshot.mount_base(), "/debug_ramdisk");
        assert_eq!(snapshot.storage_kind(), None);
    }

    #[test]
    fn test_status_summary() {
        let snapshot = StatusSnapshot {
            storage: Some(StorageInfo {
                kind: Some("tmpfs".to_string()),
            }),
            mode_stats: Some(ModeStats {
                auto: Some(3),
                magic: Some(1),
                hymo: Some(2),
            }),
            ..Default::default()
        };

        assert_eq!(
            status_summary(&snapshot),
            "Status: [Overlay: 3 | Magic: 1 | Hymo: 2] | Backend: tmpfs | Nuke: Inactive"
        );
        assert_eq!(
            status_summary(&StatusSnapshot::default()),
            "Status: [Overlay: 0 | Magic: 0 | Hymo: 0] | Backend: Unknown | Nuke: Inactive"
        );
    }
}
