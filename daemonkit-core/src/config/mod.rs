//! Configuration module
//!
//! Handles the supervisor settings and loading them from TOML files.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub mod toml_config;

/// Supervisor configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SupervisorConfig {
    /// Directory holding `<program>.pid` markers and `<program>.log` files
    pub pid_dir: PathBuf,

    /// Redirect the program's stderr to `<program>.log` instead of discarding it
    pub stderr_log: bool,
}

impl SupervisorConfig {
    /// Create a configuration for the given marker directory
    pub fn new(pid_dir: impl Into<PathBuf>) -> Self {
        Self {
            pid_dir: pid_dir.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.pid_dir.as_os_str().is_empty() {
            return Err("PID directory cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            pid_dir: default_pid_dir(),
            stderr_log: true,
        }
    }
}

/// Default marker directory: `$XDG_RUNTIME_DIR` if set, otherwise /tmp
pub fn default_pid_dir() -> PathBuf {
    match std::env::var("XDG_RUNTIME_DIR") {
        Ok(runtime_dir) if !runtime_dir.is_empty() => PathBuf::from(runtime_dir),
        _ => Path::new("/tmp").to_path_buf(),
    }
}
