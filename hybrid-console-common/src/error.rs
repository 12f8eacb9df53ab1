use thiserror::Error;

/// Common error type for Hybrid Console components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command `{command}` failed ({status}): {stderr}")]
    Command {
        command: String,
        status: String,
        stderr: String,
    },
}

impl Error {
    /// Build a command failure from the command line and its captured output.
    pub fn command(
        command: impl Into<String>,
        status: impl std::fmt::Display,
        stderr: &[u8],
    ) -> Self {
        Error::Command {
            command: command.into(),
            status: status.to_string(),
            stderr: String::from_utf8_lossy(stderr).trim().to_string(),
        }
    }
}

/// Result type alias using Hybrid Console's Error.
pub type Result<T> = std::result::Result<T, Error>;
