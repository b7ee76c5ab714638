//! Error types for Binlens Core
//!
//! Expected execution outcomes (refusal, timeout, spawn failure) are values
//! of [`crate::executor::ExecutionResult`], not errors. The variants here
//! cover the conditions that are genuinely exceptional for the library.

use thiserror::Error;

/// Result type alias using Binlens Error
pub type Result<T> = std::result::Result<T, Error>;

/// Binlens error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
