//! Executable catalog
//!
//! Scans the configured bin directories and produces the sorted,
//! duplicate-free set of executable names found there. Discovery is
//! best-effort: directories that are missing or unreadable are skipped, and
//! the worst case is an empty catalog, never an error.
//!
//! The catalog is a plain value owned by the caller. There is no hidden
//! global and no incremental update; a refresh replaces it wholesale.

use std::collections::BTreeSet;
use std::fs::Metadata;
use std::path::PathBuf;

use crate::config::DiscoveryConfig;

/// Sorted, duplicate-free list of executable names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandCatalog {
    names: Vec<String>,
}

impl CommandCatalog {
    /// Scan the configured directories for executables.
    ///
    /// Each name is a directory-listing leaf name, never a path. A name
    /// present in several directories appears once.
    pub fn discover(config: &DiscoveryConfig) -> Self {
        let mut names = BTreeSet::new();

        for dir in &config.search_dirs {
            let entries = match std::fs::read_dir(dir) {
                Ok(entries) => entries,
                Err(e) => {
                    // Missing or unreadable directories are expected; discovery
                    // never fails outright.
                    tracing::debug!(dir = %dir.display(), error = %e, "skipping bin directory");
                    continue;
                }
            };

            for entry in entries.flatten() {
                // Follow symlinks: a link to a regular executable counts.
                let Ok(metadata) = std::fs::metadata(entry.path()) else {
                    continue;
                };
                if !metadata.is_file() || !is_executable(&metadata) {
                    continue;
                }
                names.insert(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Scan the conventional bin directories
    pub fn discover_default() -> Self {
        Self::discover(&DiscoveryConfig::default())
    }

    /// The names, lexicographically sorted
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact-name membership test
    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    /// New catalog holding only names containing `pattern`, case-insensitive.
    /// The source catalog is untouched.
    pub fn filter(&self, pattern: &str) -> Self {
        let pattern = pattern.to_lowercase();
        Self {
            names: self
                .names
                .iter()
                .filter(|name| name.to_lowercase().contains(&pattern))
                .cloned()
                .collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }
}

impl<'a> IntoIterator for &'a CommandCatalog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Full path of the first executable named `name` in directory-list order
pub fn resolve(config: &DiscoveryConfig, name: &str) -> Option<PathBuf> {
    for dir in &config.search_dirs {
        let candidate = dir.join(name);
        if let Ok(metadata) = std::fs::metadata(&candidate) {
            if metadata.is_file() && is_executable(&metadata) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &Metadata) -> bool {
    // No execute bit to check; a regular file in a bin directory counts.
    true
}
