//! Status snapshot sources.
//!
//! A device snapshot is assembled from five independent pieces. A piece that
//! fails is logged and left absent in the snapshot; only a device where every
//! piece fails is reported as an error.

use hybrid_console_common::{
    DaemonState, DeviceConfig, Error, ModuleInfo, MountConfig, Result, StatusSnapshot, SystemInfo,
};

use crate::mock;
use crate::runner::CommandRunner;

/// Where status snapshots come from.
#[derive(Debug, Clone)]
pub enum StatusSource {
    /// A real device reached through a command transport.
    Device {
        runner: CommandRunner,
        config: DeviceConfig,
    },
    /// Generated demo data.
    Demo,
}

impl StatusSource {
    /// Source for the configured device.
    pub fn device(config: DeviceConfig) -> Self {
        Self::Device {
            runner: CommandRunner::new(config.transport.clone()),
            config,
        }
    }

    /// Fetch one snapshot.
    pub async fn fetch(self) -> Result<StatusSnapshot> {
        match self {
            StatusSource::Device { runner, config } => fetch_device(&runner, &config).await,
            StatusSource::Demo => Ok(mock::snapshot::random()),
        }
    }
}

async fn fetch_device(runner: &CommandRunner, config: &DeviceConfig) -> Result<StatusSnapshot> {
    let state_command = config.state_command();
    let modules_command = config.modules_command();
    let config_command = config.config_command();

    let (state, modules, mount_config, kernel, selinux) = tokio::join!(
        runner.run(&state_command),
        runner.run(&modules_command),
        runner.run(&config_command),
        runner.run("uname -r"),
        runner.run("getenforce"),
    );

    let mut failures = Vec::new();
    let mut snapshot = StatusSnapshot::default();

    let kernel = piece("kernel", kernel.map(trimmed), &mut failures);
    let selinux = piece("selinux", selinux.map(trimmed), &mut failures);
    if kernel.is_some() || selinux.is_some() {
        snapshot.system_info = Some(SystemInfo {
            kernel,
            selinux,
            mount_base: None,
        });
    }

    if let Some(state) = piece("state", parse_json::<DaemonState>(state), &mut failures) {
        state.apply_to(&mut snapshot);
    }

    snapshot.modules = piece("modules", parse_json::<Vec<ModuleInfo>>(modules), &mut failures);
    snapshot.config = piece("config", parse_json::<MountConfig>(mount_config), &mut failures);

    if failures.len() == PIECES {
        tracing::error!("Every status command failed, device unreachable");
        return Err(failures.remove(0));
    }

    tracing::info!(
        failed = failures.len(),
        modules = snapshot.modules().map(<[_]>::len).unwrap_or(0),
        "Status snapshot loaded"
    );

    Ok(snapshot)
}

const PIECES: usize = 5;

fn piece<T>(name: &str, result: Result<T>, failures: &mut Vec<Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(piece = name, error = %e, "Status piece unavailable");
            failures.push(e);
            None
        }
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(output: Result<String>) -> Result<T> {
    Ok(serde_json::from_str(output?.trim())?)
}

fn trimmed(output: String) -> String {
    output.trim().to_string()
}
