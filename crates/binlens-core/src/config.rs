//! Configuration management for Binlens
//!
//! Handles loading, saving, and managing the discovery and executor
//! settings. Every field has a serde default so a partial config file (or
//! none at all) yields the stock behavior.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Executable discovery settings
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    /// Command execution settings
    #[serde(default)]
    pub executor: ExecutorConfig,
}

/// Settings for the command discoverer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directories scanned for executables, in lookup order
    pub search_dirs: Vec<PathBuf>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            search_dirs: default_search_dirs(),
        }
    }
}

fn default_search_dirs() -> Vec<PathBuf> {
    ["/bin", "/usr/bin", "/usr/local/bin", "/sbin", "/usr/sbin"]
        .iter()
        .map(PathBuf::from)
        .collect()
}

/// Settings for the safe executor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Program names refused outright, regardless of arguments
    pub denylist: Vec<String>,
    /// Bare command -> safer invocation rewrites
    pub safe_flags: HashMap<String, String>,
    /// Wall-clock bound for a command run (seconds)
    pub command_timeout_secs: u64,
    /// Wall-clock bound for each help-lookup attempt (seconds)
    pub help_timeout_secs: u64,
    /// Cap on each captured output stream (bytes)
    pub max_output_bytes: usize,
    /// Cap on concurrently running subprocesses
    pub max_concurrent: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            denylist: default_denylist(),
            safe_flags: default_safe_flags(),
            command_timeout_secs: 10,
            help_timeout_secs: 5,
            max_output_bytes: 1024 * 1024,
            max_concurrent: 4,
        }
    }
}

fn default_denylist() -> Vec<String> {
    [
        "rm", "rmdir", "del", "format", "fdisk", "mkfs", "dd", "shred", "wipe", "halt",
        "shutdown", "reboot", "init", "kill", "killall", "pkill", "fuser",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_safe_flags() -> HashMap<String, String> {
    [
        ("ls", "ls -la"),
        ("ps", "ps aux"),
        ("df", "df -h"),
        ("du", "du -h --max-depth=1"),
        ("free", "free -h"),
        ("top", "top -b -n1"),
        ("netstat", "netstat -tuln"),
        ("ss", "ss -tuln"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl ExecutorConfig {
    /// Whether a program name is on the denylist (exact match)
    pub fn is_denied(&self, program: &str) -> bool {
        self.denylist.iter().any(|d| d == program)
    }

    /// Wall-clock bound for a command run
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    /// Wall-clock bound for each help-lookup attempt
    pub fn help_timeout(&self) -> Duration {
        Duration::from_secs(self.help_timeout_secs)
    }
}

/// Configuration manager for loading and saving config
pub struct ConfigManager {
    config_path: PathBuf,
    config: Config,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::with_path(config_path)
    }

    /// Create a config manager with a specific path
    pub fn with_path(config_path: PathBuf) -> Result<Self> {
        let config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            Config::default()
        };

        Ok(Self { config_path, config })
    }

    /// Get the default config path
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not find config directory".to_string()))?;

        Ok(config_dir.join("binlens").join("config.toml"))
    }

    /// Load configuration from a file
    fn load_from_path(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Path this manager loads from and saves to
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable access to configuration
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Serialize the current configuration as pretty toml
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(&self.config)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Save the current configuration to disk
    pub fn save(&self) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = self.to_toml_string()?;

        std::fs::write(&self.config_path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}
