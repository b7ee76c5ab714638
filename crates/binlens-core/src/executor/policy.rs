//! Command-line policy: denylist check and safe-flag substitution
//!
//! The denylist is a string-equality test on the first whitespace-delimited
//! token only. It does not inspect later tokens, shell operators, or command
//! substitution, so a chained line like `echo hi; rm -rf /` passes. Treat it
//! as a convenience guard against accidentally typed destructive commands,
//! never as a security control.

use std::collections::HashMap;

/// Fixed refusal message for denylisted commands
pub const BLOCKED_MESSAGE: &str = "Command blocked for safety reasons";

/// First whitespace-delimited token, i.e. the program name
pub fn first_token(command_line: &str) -> Option<&str> {
    command_line.split_whitespace().next()
}

/// Rewrite a bare mapped program name to its safer invocation.
///
/// Applies only when the whole command line equals the bare program name; any
/// user-supplied arguments leave the line untouched.
pub fn apply_safe_flags(command_line: &str, safe_flags: &HashMap<String, String>) -> String {
    if let Some(substitute) = safe_flags.get(command_line) {
        return substitute.clone();
    }
    command_line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExecutorConfig;

    #[test]
    fn test_first_token() {
        assert_eq!(first_token("ls -la"), Some("ls"));
        assert_eq!(first_token("rm"), Some("rm"));
        assert_eq!(first_token("  df   -h "), Some("df"));
        assert_eq!(first_token(""), None);
        assert_eq!(first_token("   "), None);
    }

    #[test]
    fn test_denylist_exact_match_only() {
        let config = ExecutorConfig::default();

        assert!(config.is_denied("rm"));
        assert!(config.is_denied("rmdir"));
        assert!(config.is_denied("shutdown"));
        assert!(config.is_denied("fuser"));

        // Prefixes, suffixes, and case variants are not matches
        assert!(!config.is_denied("rm2"));
        assert!(!config.is_denied("arm"));
        assert!(!config.is_denied("RM"));
        // Path-qualified names slip through; that is the documented limit
        assert!(!config.is_denied("/bin/rm"));
    }

    #[test]
    fn test_safe_flags_bare_command() {
        let config = ExecutorConfig::default();

        assert_eq!(apply_safe_flags("ls", &config.safe_flags), "ls -la");
        assert_eq!(apply_safe_flags("ps", &config.safe_flags), "ps aux");
        assert_eq!(apply_safe_flags("du", &config.safe_flags), "du -h --max-depth=1");
        assert_eq!(apply_safe_flags("top", &config.safe_flags), "top -b -n1");
    }

    #[test]
    fn test_safe_flags_skipped_with_arguments() {
        let config = ExecutorConfig::default();

        assert_eq!(apply_safe_flags("ls -1", &config.safe_flags), "ls -1");
        assert_eq!(apply_safe_flags("ps -ef", &config.safe_flags), "ps -ef");
        assert_eq!(apply_safe_flags("df /tmp", &config.safe_flags), "df /tmp");
    }

    #[test]
    fn test_unmapped_command_unchanged() {
        let config = ExecutorConfig::default();

        assert_eq!(apply_safe_flags("echo hello", &config.safe_flags), "echo hello");
        assert_eq!(apply_safe_flags("uname", &config.safe_flags), "uname");
    }
}
