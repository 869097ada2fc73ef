use crate::application::services::{ConsoleLauncher, ProcessRunner};
use crate::domain::value_objects::ConsoleCommand;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Infrastructure implementation of ProcessRunner using tokio's process support.
/// The child inherits the terminal; its output is not captured.
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }

    /// Creates a console launcher backed by this runner
    pub fn create_launcher(self) -> ConsoleLauncher {
        ConsoleLauncher::new(Box::new(self))
    }
}

impl Default for TokioProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, command: &ConsoleCommand) -> Result<Option<i32>> {
        debug!(args = ?command.args, "Spawning {}", command.program);

        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .await
            .with_context(|| format!("Failed to start console client '{}'", command.program))?;

        Ok(status.code())
    }
}
