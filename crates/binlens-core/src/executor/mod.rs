//! Safe executor for user-composed command lines
//!
//! Pipeline: denylist check, safe-flag substitution for bare invocations,
//! then shell execution with piped output under a wall-clock timeout. Every
//! expected outcome - including refusal, timeout, and spawn failure - comes
//! back as an [`ExecutionResult`] value; the executor never errors across
//! its boundary for those.

pub mod policy;
pub mod quick;

mod help;
mod process_utils;

pub use help::NO_HELP_MESSAGE;
pub use quick::QuickAction;

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;

use crate::config::ExecutorConfig;

/// Message returned when a run exceeds its wall-clock bound
pub const TIMEOUT_MESSAGE: &str = "Command timed out";

/// Marker appended to a captured stream cut at the output cap
pub const TRUNCATION_MARKER: &str = "\n[output truncated]";

/// Outcome of one execution request
///
/// Normal termination is `Completed` regardless of exit status; a nonzero
/// exit code is informational, not a failure. Output is captured in full
/// (up to the configured cap) only after the subprocess terminates or is
/// killed by timeout - there is no streaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecutionResult {
    /// Process ran to completion
    Completed {
        stdout: String,
        stderr: String,
        /// Exit code if the process exited normally
        exit_code: Option<i32>,
    },
    /// Policy refused the command; no process was spawned
    Refused { reason: String },
    /// Attempted but did not complete: timeout or spawn failure
    Failed { message: String },
}

impl ExecutionResult {
    pub fn refused(reason: impl Into<String>) -> Self {
        Self::Refused {
            reason: reason.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    pub fn is_refused(&self) -> bool {
        matches!(self, Self::Refused { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Runs command lines through a shell with policy checks and a timeout
pub struct Executor {
    config: ExecutorConfig,
    limiter: Arc<Semaphore>,
}

impl Executor {
    pub fn new() -> Self {
        Self::with_config(ExecutorConfig::default())
    }

    pub fn with_config(config: ExecutorConfig) -> Self {
        let limiter = Arc::new(Semaphore::new(config.max_concurrent.max(1)));
        Self { config, limiter }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Execute a command line under the configured timeout
    pub async fn execute(&self, command_line: &str) -> ExecutionResult {
        self.execute_with_timeout(command_line, self.config.command_timeout())
            .await
    }

    /// Execute a command line under an explicit timeout.
    ///
    /// The denylist check inspects only the first whitespace-delimited
    /// token; it is a guard against accidental destructive commands, not a
    /// sandbox. The safe-flag rewrite applies only when the command line is
    /// exactly a bare mapped program name.
    pub async fn execute_with_timeout(
        &self,
        command_line: &str,
        timeout: Duration,
    ) -> ExecutionResult {
        let command_line = command_line.trim();

        let Some(program) = policy::first_token(command_line) else {
            return ExecutionResult::failed("Error: empty command");
        };

        if self.config.is_denied(program) {
            tracing::debug!(program, "command refused by denylist");
            return ExecutionResult::refused(policy::BLOCKED_MESSAGE);
        }

        let command_line = policy::apply_safe_flags(command_line, &self.config.safe_flags);

        self.run_shell(&command_line, timeout).await
    }

    /// Spawn through the platform shell and capture output, bounded by
    /// `timeout`. No policy checks; used by `execute` and the help lookup.
    pub(crate) async fn run_shell(&self, command_line: &str, timeout: Duration) -> ExecutionResult {
        let _permit = match self.limiter.acquire().await {
            Ok(permit) => permit,
            Err(_) => return ExecutionResult::failed("Error: executor is shut down"),
        };

        let mut cmd = process_utils::shell_command(command_line);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(unix)]
        cmd.process_group(0);

        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => return ExecutionResult::failed(format!("Error: {}", e)),
        };
        let pid = child.id();

        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => ExecutionResult::Completed {
                stdout: self.capture(output.stdout),
                stderr: self.capture(output.stderr),
                exit_code: output.status.code(),
            },
            Ok(Err(e)) => ExecutionResult::failed(format!("Error: {}", e)),
            Err(_) => {
                // The shell may have spawned children of its own; take down
                // the whole process group, then let kill_on_drop reap.
                tracing::warn!(command = command_line, timeout_secs = timeout.as_secs(), "command timed out");
                process_utils::kill_process_group(pid);
                ExecutionResult::failed(TIMEOUT_MESSAGE)
            }
        }
    }

    /// Lossy-decode a captured stream, cut at the configured byte cap
    fn capture(&self, bytes: Vec<u8>) -> String {
        let cap = self.config.max_output_bytes;
        let mut text = String::from_utf8_lossy(&bytes).into_owned();
        if text.len() > cap {
            let mut end = cap;
            while end > 0 && !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
            text.push_str(TRUNCATION_MARKER);
        }
        text
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}
