//! Reusable UI components for the status view.

pub mod confirm_dialog;
pub mod mode_bar;
pub mod partition_chip;
pub mod skeleton;

pub use confirm_dialog::ConfirmDialog;
pub use mode_bar::{ModeBar, segment_portions};
pub use partition_chip::PartitionChip;
pub use skeleton::Skeleton;
