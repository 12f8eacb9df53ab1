//! Hybrid Console Common Library
//!
//! Shared types and the derivation layer for the Hybrid Mount status console:
//!
//! - [`snapshot`] - Status snapshot read model (`StatusSnapshot`, `DaemonState`)
//! - [`partitions`] - Builtin partition set and the merged display list
//! - [`stats`] - Mount counters and the mode distribution bar
//! - [`locale`] - Translation dictionary and backend mode labels
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod locale;
pub mod partitions;
pub mod snapshot;
pub mod stats;

// Re-export commonly used types at the crate root
pub use config::{ConsoleConfig, DeviceConfig, LogFormat, LoggingConfig, load_config, parse_config};
pub use error::{Error, Result};
pub use locale::{Dictionary, UNKNOWN_MODE, resolve_mode_label};
pub use partitions::{BUILTIN_PARTITIONS, PartitionEntry, display_partitions, merge_partitions};
pub use snapshot::{
    DaemonState, ModeStats, ModuleInfo, MountConfig, StatusSnapshot, StorageInfo, SystemInfo,
    status_summary,
};
pub use stats::{ModeDistribution, count_mounted, distribute, snapshot_distribution};

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
