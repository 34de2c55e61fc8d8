//! TOML configuration file I/O
//!
//! Handles loading the supervisor configuration from TOML files in the
//! user's configuration directory.

use crate::config::SupervisorConfig;
use crate::error::{ConfigError, DaemonkitError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "DAEMONKIT_CONFIG_DIR";

/// Environment variable overriding the configured PID directory
pub const PID_DIR_ENV: &str = "DAEMONKIT_PID_DIR";

/// Get the default configuration directory
///
/// Returns ~/.config/daemonkit, or DAEMONKIT_CONFIG_DIR if set
pub fn get_config_dir() -> Result<PathBuf, DaemonkitError> {
    if let Ok(config_dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        DaemonkitError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("daemonkit"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, DaemonkitError> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the default TOML file
pub fn load_config() -> Result<SupervisorConfig, DaemonkitError> {
    let config_path = get_config_path()?;
    load_config_from_path(&config_path)
}

/// Load configuration from a specific TOML file
///
/// A missing file yields the default configuration.
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<SupervisorConfig, DaemonkitError> {
    let path = path.as_ref();
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(SupervisorConfig::default());
        }
        Err(e) => {
            return Err(DaemonkitError::Config(ConfigError::IoError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            }))
        }
    };

    let config: SupervisorConfig = toml::from_str(&contents)?;

    config
        .validate()
        .map_err(|e| DaemonkitError::Config(ConfigError::ValidationError { message: e }))?;

    debug!("Loaded configuration from {:?}: {:?}", path, config);
    Ok(config)
}

/// Apply the PID directory overrides on top of a loaded configuration
///
/// Precedence: explicit flag, then DAEMONKIT_PID_DIR, then the file value.
pub fn apply_pid_dir_override(
    mut config: SupervisorConfig,
    flag: Option<PathBuf>,
) -> Result<SupervisorConfig, DaemonkitError> {
    let env_dir = std::env::var_os(PID_DIR_ENV).map(PathBuf::from);

    if let Some(dir) = flag.or(env_dir) {
        config.pid_dir = dir;
        config
            .validate()
            .map_err(|e| DaemonkitError::Config(ConfigError::ValidationError { message: e }))?;
    }

    Ok(config)
}
