//! Config tests
//!
//! Default values, partial-file merging, and the ConfigManager round trip.

use binlens_core::config::{Config, ConfigManager, ExecutorConfig};
use tempfile::TempDir;

mod default_tests {
    use super::*;

    #[test]
    fn test_executor_defaults() {
        let config = ExecutorConfig::default();

        assert_eq!(config.command_timeout_secs, 10);
        assert_eq!(config.help_timeout_secs, 5);
        assert_eq!(config.max_output_bytes, 1024 * 1024);
        assert_eq!(config.max_concurrent, 4);

        for name in [
            "rm", "rmdir", "del", "format", "fdisk", "mkfs", "dd", "shred", "wipe", "halt",
            "shutdown", "reboot", "init", "kill", "killall", "pkill", "fuser",
        ] {
            assert!(config.is_denied(name), "{} should be denylisted", name);
        }
        assert_eq!(config.denylist.len(), 17);

        assert_eq!(config.safe_flags.get("ls").map(String::as_str), Some("ls -la"));
        assert_eq!(config.safe_flags.get("free").map(String::as_str), Some("free -h"));
        assert_eq!(config.safe_flags.len(), 8);
    }

    #[test]
    fn test_discovery_defaults() {
        let config = Config::default();

        let dirs: Vec<String> = config
            .discovery
            .search_dirs
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        assert_eq!(dirs, ["/bin", "/usr/bin", "/usr/local/bin", "/sbin", "/usr/sbin"]);
    }
}

mod manager_tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("config.toml")).unwrap();

        assert_eq!(manager.config().executor.command_timeout_secs, 10);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut manager = ConfigManager::with_path(path.clone()).unwrap();
        manager.config_mut().executor.command_timeout_secs = 42;
        manager
            .config_mut()
            .executor
            .denylist
            .push("badtool".to_string());
        manager.save().unwrap();

        let reloaded = ConfigManager::with_path(path).unwrap();
        assert_eq!(reloaded.config().executor.command_timeout_secs, 42);
        assert!(reloaded.config().executor.is_denied("badtool"));
        assert!(reloaded.config().executor.is_denied("rm"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[executor]\ncommand_timeout_secs = 3\n").unwrap();

        let manager = ConfigManager::with_path(path).unwrap();
        let executor = &manager.config().executor;

        assert_eq!(executor.command_timeout_secs, 3);
        assert_eq!(executor.help_timeout_secs, 5);
        assert!(executor.is_denied("rm"));
        assert_eq!(manager.config().discovery.search_dirs.len(), 5);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [").unwrap();

        assert!(ConfigManager::with_path(path).is_err());
    }
}
