//! Core library for the daemonkit supervisor
//!
//! This crate provides PID marker handling, detached process launching and
//! the start/stop/sample/restart lifecycle built on top of them.

pub mod error;

pub mod config;
pub mod marker;
pub mod process;
pub mod supervisor;
pub mod uptime;

/// Initialize logging infrastructure
///
/// Uses the systemd journal when running under systemd, otherwise logs to
/// stderr. Diagnostics stay at WARN unless `verbose` is set, so normal command
/// output is not interleaved with log lines.
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };

    #[cfg(target_os = "linux")]
    {
        if std::env::var("JOURNAL_STREAM").is_ok() {
            let journal_layer = tracing_journald::layer()?;
            tracing_subscriber::registry()
                .with(journal_layer)
                .with(level)
                .init();
            return Ok(());
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .with(level)
        .init();

    Ok(())
}
