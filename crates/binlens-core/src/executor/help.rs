//! Best-effort help-text lookup
//!
//! Tries `<command> --help`, `<command> -h`, and the shell-builtin
//! `help <command>` in order, each under the short help timeout. The
//! attempted forms are never dangerous by construction, so this path skips
//! the denylist and safe-flag logic.

use super::{ExecutionResult, Executor};

/// Fallback when every help attempt comes back empty
pub const NO_HELP_MESSAGE: &str = "No help information available";

/// Shell exit codes for "command not found" / "not executable"; stderr from
/// such an attempt is shell noise, not help text.
const NOT_EXECUTABLE: i32 = 126;
const NOT_FOUND: i32 = 127;

impl Executor {
    /// Look up help text for a command name.
    ///
    /// Returns the first attempt's non-empty stdout, else its non-empty
    /// stderr (some tools print usage there), else moves to the next
    /// attempt. After all attempts, returns [`NO_HELP_MESSAGE`].
    ///
    /// Stderr is ignored for the `help <command>` builtin attempt and for
    /// attempts the shell could not run at all (exit 126/127): in both
    /// cases it carries shell diagnostics, not help text.
    pub async fn help(&self, command_name: &str) -> String {
        let attempts = [
            (format!("{} --help", command_name), true),
            (format!("{} -h", command_name), true),
            (format!("help {}", command_name), false),
        ];

        for (attempt, accept_stderr) in &attempts {
            let ExecutionResult::Completed {
                stdout,
                stderr,
                exit_code,
            } = self.run_shell(attempt, self.config.help_timeout()).await
            else {
                continue;
            };

            if !stdout.trim().is_empty() {
                return stdout;
            }
            let shell_noise = matches!(exit_code, Some(NOT_FOUND) | Some(NOT_EXECUTABLE));
            if *accept_stderr && !shell_noise && !stderr.trim().is_empty() {
                return stderr;
            }
        }

        NO_HELP_MESSAGE.to_string()
    }
}
