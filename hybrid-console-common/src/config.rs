use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default location of the daemon's runtime state file on the device.
pub const DEFAULT_STATE_FILE: &str = "/data/adb/meta-hybrid/run/daemon_state.json";

/// Default location of the daemon binary on the device.
pub const DEFAULT_DAEMON_BINARY: &str = "/data/adb/modules/meta-hybrid/meta-hybrid";

/// How to reach the managed device and which commands to run on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Command prefix every device command is appended to as a single argument.
    ///
    /// `["sh", "-c"]` runs locally, `["adb", "shell"]` targets a USB device.
    #[serde(default = "default_transport")]
    pub transport: Vec<String>,

    /// Path of the daemon state file.
    #[serde(default = "default_state_file")]
    pub state_file: String,

    /// Path of the daemon binary used for `modules` and `show-config`.
    #[serde(default = "default_daemon_binary")]
    pub daemon_binary: String,

    /// Command issued when the user confirms a reboot.
    #[serde(default = "default_reboot_command")]
    pub reboot_command: String,
}

fn default_transport() -> Vec<String> {
    vec!["sh".to_string(), "-c".to_string()]
}

fn default_state_file() -> String {
    DEFAULT_STATE_FILE.to_string()
}

fn default_daemon_binary() -> String {
    DEFAULT_DAEMON_BINARY.to_string()
}

fn default_reboot_command() -> String {
    "reboot".to_string()
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            transport: default_transport(),
            state_file: default_state_file(),
            daemon_binary: default_daemon_binary(),
            reboot_command: default_reboot_command(),
        }
    }
}

impl DeviceConfig {
    /// Command that prints the daemon state file.
    pub fn state_command(&self) -> String {
        format!("cat {}", self.state_file)
    }

    /// Command that prints the module listing as JSON.
    pub fn modules_command(&self) -> String {
        format!("{} modules", self.daemon_binary)
    }

    /// Command that prints the daemon configuration as JSON.
    pub fn config_command(&self) -> String {
        format!("{} show-config", self.daemon_binary)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Top-level console configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Device transport and command settings.
    #[serde(default)]
    pub device: DeviceConfig,

    /// Optional translation file (nested JSON, see [`crate::locale::Dictionary`]).
    #[serde(default)]
    pub locale: Option<PathBuf>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Load a configuration file in JSON5 format.
pub fn load_config<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    json5::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a configuration from a JSON5 string.
pub fn parse_config<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T> {
    json5::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
}
