//! Commands issued to the managed device.

use hybrid_console_common::{DeviceConfig, Result};

use crate::runner::CommandRunner;

/// Remote command interface.
#[derive(Debug, Clone)]
pub enum DeviceCommands {
    /// A real device reached through a command transport.
    Device {
        runner: CommandRunner,
        reboot_command: String,
    },
    /// Demo mode: commands are only logged.
    Demo,
}

impl DeviceCommands {
    /// Command interface for the configured device.
    pub fn device(config: &DeviceConfig) -> Self {
        Self::Device {
            runner: CommandRunner::new(config.transport.clone()),
            reboot_command: config.reboot_command.clone(),
        }
    }

    /// Ask the device to reboot.
    ///
    /// A successful return only means the command was accepted; the device
    /// usually drops the connection while it goes down.
    pub async fn reboot(self) -> Result<()> {
        match self {
            DeviceCommands::Device {
                runner,
                reboot_command,
            } => {
                tracing::info!(command = %reboot_command, "Requesting device reboot");
                runner.run(&reboot_command).await?;
                Ok(())
            }
            DeviceCommands::Demo => {
                tracing::info!("Demo mode, reboot request ignored");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reboot_runs_configured_command() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("rebooted");
        let config = DeviceConfig {
            reboot_command: format!("touch {}", marker.display()),
            ..Default::default()
        };

        DeviceCommands::device(&config).reboot().await.unwrap();

        assert!(marker.exists());
    }

    #[tokio::test]
    async fn test_reboot_failure_is_reported() {
        let config = DeviceConfig {
            reboot_command: "exit 1".to_string(),
            ..Default::default()
        };

        assert!(DeviceCommands::device(&config).reboot().await.is_err());
    }

    #[tokio::test]
    async fn test_demo_reboot() {
        assert!(DeviceCommands::Demo.reboot().await.is_ok());
    }
}
