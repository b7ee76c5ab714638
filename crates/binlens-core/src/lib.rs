//! Binlens Core - executable discovery and safe bounded command execution
//!
//! This crate provides the core functionality for the Binlens front ends:
//! - Catalog of executable names discovered from the system bin directories
//! - Safe executor: denylist check, safe-flag substitution, shell execution
//!   with a wall-clock timeout and captured output
//! - Best-effort help-text lookup
//! - Canned quick actions
//!
//! The executor's denylist is a convenience guard against accidental
//! destructive commands, not a security boundary; see the `executor::policy`
//! module docs.

pub mod catalog;
pub mod config;
pub mod error;
pub mod executor;

pub use catalog::CommandCatalog;
pub use config::{Config, ConfigManager, DiscoveryConfig, ExecutorConfig};
pub use error::{Error, Result};
pub use executor::{ExecutionResult, Executor, QuickAction};
