//! Unit tests for error types and conversions

use daemonkit_core::error::{ConfigError, DaemonkitError, MarkerError, ProcessError};

#[test]
fn test_marker_error_display() {
    let error = MarkerError::NotFound {
        path: "/tmp/echo-server.pid".to_string(),
    };
    assert_eq!(error.to_string(), "No marker file found at /tmp/echo-server.pid");
}

#[test]
fn test_process_error_display() {
    let error = ProcessError::NotInitialized { pid: 0 };
    assert_eq!(error.to_string(), "Process not initialized (pid 0)");

    let error = ProcessError::SignalFailed {
        pid: 1234,
        reason: "ESRCH: No such process".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Failed to send SIGINT to process 1234: ESRCH: No such process"
    );
}

#[test]
fn test_config_error_display() {
    let error = ConfigError::ValidationError {
        message: "PID directory cannot be empty".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Configuration validation error: PID directory cannot be empty"
    );
}

#[test]
fn test_daemonkit_error_wraps_source_message() {
    let error: DaemonkitError = MarkerError::RemoveFailed {
        path: "/tmp/x.pid".to_string(),
        reason: "Permission denied".to_string(),
    }
    .into();
    assert_eq!(
        error.to_string(),
        "Marker error: Failed to remove marker file /tmp/x.pid: Permission denied"
    );
}

#[test]
fn test_daemonkit_error_from_process() {
    let error: DaemonkitError = ProcessError::SpawnFailed {
        program: "echo-server".to_string(),
        reason: "not found".to_string(),
    }
    .into();
    assert!(matches!(error, DaemonkitError::Process(_)));
}

#[test]
fn test_daemonkit_error_from_toml() {
    let toml_error = toml::from_str::<toml::Table>("invalid toml").unwrap_err();
    let error: DaemonkitError = toml_error.into();
    assert!(matches!(error, DaemonkitError::Toml(_)));
}
