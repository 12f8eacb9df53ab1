//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use hybrid_console_common::{ConsoleConfig, Result, load_config};

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(about = "Hybrid Mount status console")]
pub struct ConsoleArgs {
    /// Path to configuration file (defaults to the user config directory).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Show generated demo data instead of talking to a device.
    #[arg(long)]
    pub demo: bool,
}

impl ConsoleArgs {
    /// Load the configuration.
    ///
    /// An explicit `--config` must exist. Without it the default path is used
    /// when present, otherwise built-in defaults apply.
    pub fn load_config(&self) -> Result<ConsoleConfig> {
        let mut config = match (&self.config, default_config_path()) {
            (Some(path), _) => load_config(path)?,
            (None, Some(path)) if path.exists() => load_config(&path)?,
            _ => ConsoleConfig::default(),
        };

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        Ok(config)
    }
}

/// Default config file path (`<config dir>/hybrid-console/config.json5`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hybrid-console").join("config.json5"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args =
            ConsoleArgs::try_parse_from(["hybrid-console", "--demo", "--log-level", "debug"])
                .unwrap();
        assert!(args.demo);
        assert_eq!(args.log_level, Some("debug".to_string()));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_explicit_config_and_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("console.json5");
        std::fs::write(
            &path,
            r#"{ device: { transport: ["adb", "shell"] }, logging: { level: "warn" } }"#,
        )
        .unwrap();

        let args = ConsoleArgs {
            config: Some(path),
            log_level: Some("trace".to_string()),
            demo: false,
        };
        let config = args.load_config().unwrap();

        assert_eq!(config.device.transport, vec!["adb", "shell"]);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let args = ConsoleArgs {
            config: Some(PathBuf::from("/nonexistent/hybrid-console.json5")),
            log_level: None,
            demo: false,
        };
        assert!(args.load_config().is_err());
    }
}
