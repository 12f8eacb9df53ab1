//! Mount counters and the mode distribution bar.

use crate::snapshot::{ModuleInfo, StatusSnapshot};

/// Share of modules per mount mode, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModeDistribution {
    pub auto: f64,
    pub magic: f64,
}

impl ModeDistribution {
    /// Whether both segments are empty (no modules counted at all).
    pub fn is_empty(&self) -> bool {
        self.auto == 0.0 && self.magic == 0.0
    }
}

/// Convert the raw auto/magic counters into percentages.
///
/// Absent counters count as zero. A zero total yields `{0, 0}`. Each share is
/// an independent ratio of the total, so the two values are not forced to sum
/// to exactly 100.
pub fn distribute(auto: Option<u64>, magic: Option<u64>) -> ModeDistribution {
    let auto = auto.unwrap_or(0) as f64;
    let magic = magic.unwrap_or(0) as f64;
    let total = auto + magic;

    if total == 0.0 {
        return ModeDistribution::default();
    }

    ModeDistribution {
        auto: auto / total * 100.0,
        magic: magic / total * 100.0,
    }
}

/// Mode distribution for a snapshot's counters.
pub fn snapshot_distribution(snapshot: &StatusSnapshot) -> ModeDistribution {
    distribute(snapshot.auto_count(), snapshot.magic_count())
}

/// Number of modules reporting a mount. Absent collection counts as zero.
pub fn count_mounted(modules: Option<&[ModuleInfo]>) -> usize {
    modules
        .map(|modules| modules.iter().filter(|m| m.is_mounted).count())
        .unwrap_or(0)
}
