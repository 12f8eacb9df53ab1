//! Builtin partition set and the partition display list.

use crate::snapshot::StatusSnapshot;

/// Partitions the daemon always knows how to mount, regardless of config.
pub const BUILTIN_PARTITIONS: &[&str] = &[
    "system",
    "vendor",
    "product",
    "system_ext",
    "odm",
    "oem",
    "apex",
    "mi_ext",
    "my_bigball",
    "my_carrier",
    "my_company",
    "my_engineering",
    "my_heytap",
    "my_manifest",
    "my_preload",
    "my_product",
    "my_region",
    "my_reserve",
    "my_stock",
    "optics",
    "prism",
];

/// A partition as shown on the status view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionEntry {
    pub name: String,
    /// Whether the partition currently carries a daemon mount.
    pub active: bool,
}

/// Union `builtin` and `dynamic`, de-duplicated in first-seen order.
///
/// Builtin entries come first. An absent dynamic list is treated as empty.
pub fn merge_partitions(builtin: &[&str], dynamic: Option<&[String]>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(builtin.len());

    let dynamic = dynamic.unwrap_or_default().iter().map(String::as_str);
    for name in builtin.iter().copied().chain(dynamic) {
        if !merged.iter().any(|existing| existing == name) {
            merged.push(name.to_string());
        }
    }

    merged
}

/// Builtin plus configured partitions, each flagged with its activity.
pub fn display_partitions(snapshot: &StatusSnapshot) -> Vec<PartitionEntry> {
    merge_partitions(BUILTIN_PARTITIONS, snapshot.dynamic_partitions())
        .into_iter()
        .map(|name| PartitionEntry {
            active: snapshot.is_partition_active(&name),
            name,
        })
        .collect()
}
