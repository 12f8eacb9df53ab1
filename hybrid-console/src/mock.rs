//! Mock status data for demo mode and tests.
//!
//! Provides snapshots that look like a real Hybrid Mount device without
//! needing a device, adb, or the daemon.

use hybrid_console_common::{
    ModeStats, ModuleInfo, MountConfig, StatusSnapshot, StorageInfo, SystemInfo,
};

/// Generate a mock module entry.
pub fn module(id: &str, mode: &str, is_mounted: bool) -> ModuleInfo {
    ModuleInfo {
        mode: Some(mode.to_string()),
        version: "v1.0".to_string(),
        author: "demo".to_string(),
        ..ModuleInfo::new(id, is_mounted)
    }
}

/// Mock snapshots.
pub mod snapshot {
    use super::*;

    const MODULE_IDS: &[&str] = &[
        "zygisk_next",
        "lsposed",
        "shamiko",
        "busybox_ndk",
        "play_integrity_fix",
        "systemless_hosts",
        "bootloop_saver",
        "adaway_fonts",
    ];

    /// A typical tmpfs device: 3 overlay modules, 1 magic module, one ignored.
    pub fn device() -> StatusSnapshot {
        StatusSnapshot {
            storage: Some(StorageInfo {
                kind: Some("tmpfs".to_string()),
            }),
            system_info: Some(SystemInfo {
                kernel: Some("5.15.148-android14-11-gd4a5c0a1b2c3".to_string()),
                selinux: Some("Enforcing".to_string()),
                mount_base: Some("/debug_ramdisk".to_string()),
            }),
            modules: Some(vec![
                module("zygisk_next", "auto", true),
                module("lsposed", "auto", true),
                module("shamiko", "auto", true),
                module("busybox_ndk", "magic", true),
                module("bootloop_saver", "ignore", false),
            ]),
            config: Some(MountConfig {
                partitions: Some(vec!["my_custom".to_string()]),
                mountsource: Some("KSU".to_string()),
            }),
            mode_stats: Some(ModeStats {
                auto: Some(3),
                magic: Some(1),
                hymo: Some(0),
            }),
            active_partitions: Some(vec![
                "system".to_string(),
                "vendor".to_string(),
                "product".to_string(),
            ]),
            nuke_active: Some(false),
        }
    }

    /// A snapshot with nothing but a kernel version (old daemon, no state file).
    pub fn minimal() -> StatusSnapshot {
        StatusSnapshot {
            system_info: Some(SystemInfo {
                kernel: Some("4.19.157-perf".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// A randomized device snapshot for demo mode.
    pub fn random() -> StatusSnapshot {
        use rand::Rng;
        use rand::seq::IndexedRandom;

        let mut rng = rand::rng();
        let mut snapshot = device();

        let modules: Vec<ModuleInfo> = MODULE_IDS
            .iter()
            .map(|id| {
                let mode = ["auto", "auto", "magic", "hymofs", "ignore"]
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or("auto");
                module(id, mode, mode != "ignore" && rng.random_bool(0.9))
            })
            .collect();

        let count = |wanted: &str| {
            modules
                .iter()
                .filter(|m| m.is_mounted && m.mode.as_deref() == Some(wanted))
                .count() as u64
        };
        snapshot.mode_stats = Some(ModeStats {
            auto: Some(count("auto")),
            magic: Some(count("magic")),
            hymo: Some(count("hymofs")),
        });
        snapshot.modules = Some(modules);
        snapshot.storage = Some(StorageInfo {
            kind: ["tmpfs", "ext4", "erofs"]
                .choose(&mut rng)
                .map(|s| s.to_string()),
        });
        snapshot.nuke_active = Some(rng.random_bool(0.3));

        snapshot
    }
}
