//! Shell command execution against the managed device.

use tokio::process::Command;

use hybrid_console_common::{Error, Result};

/// Runs device commands through a transport prefix.
///
/// The command line is appended as a single final argument, so
/// `["adb", "shell"]` + `"uname -r"` executes `adb shell "uname -r"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRunner {
    transport: Vec<String>,
}

impl CommandRunner {
    /// Create a runner for the given transport prefix.
    pub fn new(transport: Vec<String>) -> Self {
        Self { transport }
    }

    /// Run `command` and return its stdout. Non-zero exit is an error.
    pub async fn run(&self, command: &str) -> Result<String> {
        let (program, args) = self
            .transport
            .split_first()
            .ok_or_else(|| Error::Config("Device transport is empty".to_string()))?;

        tracing::debug!(program = %program, command = %command, "Running device command");

        let output = Command::new(program)
            .args(args)
            .arg(command)
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(Error::command(command, output.status, &output.stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local() -> CommandRunner {
        CommandRunner::new(vec!["sh".to_string(), "-c".to_string()])
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let output = local().run("echo hybrid").await.unwrap();
        assert_eq!(output.trim(), "hybrid");
    }

    #[tokio::test]
    async fn test_run_nonzero_exit() {
        let err = local().run("echo boom >&2; exit 3").await.unwrap_err();
        match err {
            Error::Command {
                command, stderr, ..
            } => {
                assert_eq!(command, "echo boom >&2; exit 3");
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_run_empty_transport() {
        let err = CommandRunner::new(vec![]).run("true").await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_run_missing_program() {
        let runner = CommandRunner::new(vec!["/nonexistent/hybrid-transport".to_string()]);
        assert!(matches!(runner.run("true").await, Err(Error::Io(_))));
    }
}
