//! Error types for the daemonkit supervisor
//!
//! Every failure in a supervisor invocation is terminal. These types carry
//! enough context for the binary to print a single `**<error>` line before
//! exiting with status 1.

use thiserror::Error;

/// Main error type for the daemonkit application
#[derive(Error, Debug)]
pub enum DaemonkitError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to reading, writing or removing marker files
    #[error("Marker error: {0}")]
    Marker(#[from] MarkerError),

    /// Errors related to spawning or signalling the supervised program
    #[error("Process error: {0}")]
    Process(#[from] ProcessError),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// Marker file errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    #[error("No marker file found at {path}")]
    NotFound { path: String },

    #[error("Failed to read marker file {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Malformed marker file {path}: {content:?}")]
    Malformed { path: String, content: String },

    #[error("Failed to write marker file {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("Failed to remove marker file {path}: {reason}")]
    RemoveFailed { path: String, reason: String },

    #[error("Invalid program name: {program:?}")]
    InvalidProgram { program: String },
}

/// Supervised process errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("Failed to spawn '{program}': {reason}")]
    SpawnFailed { program: String, reason: String },

    #[error("Failed to open log file {path}: {reason}")]
    LogFileFailed { path: String, reason: String },

    #[error("Failed to resolve process {pid}: {reason}")]
    ResolveFailed { pid: i32, reason: String },

    #[error("Process not initialized (pid {pid})")]
    NotInitialized { pid: i32 },

    #[error("Failed to send SIGINT to process {pid}: {reason}")]
    SignalFailed { pid: i32, reason: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DaemonkitError>;
