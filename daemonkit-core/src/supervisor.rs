//! Start, stop, sample and restart supervised programs
//!
//! The supervisor owns no state beyond its configuration. Each operation reads
//! the program's marker file, acts on it, and returns; the first error ends
//! the operation with nothing rolled back.
//!
//! Concurrent invocations for the same program are not coordinated. Two
//! simultaneous starts can both spawn and overwrite each other's marker.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::SupervisorConfig;
use crate::error::Result;
use crate::marker::{self, MarkerRecord, PidDir};
use crate::process::{OsProcessControl, ProcessControl, StderrTarget};
use crate::uptime::uptime_since;

/// Status block printed by `sample`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleReport {
    pub program: String,
    /// The pid field as stored in the marker
    pub pid: String,
    pub marker_path: String,
    pub uptime: String,
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n  ----------\n  PRG: {}\n  ----------\n  PID: {}\n  TMP: {}\n  UPT: {}\n",
            self.program, self.pid, self.marker_path, self.uptime
        )
    }
}

/// Marker-file driven process supervisor
#[derive(Debug)]
pub struct Supervisor<P: ProcessControl = OsProcessControl> {
    pid_dir: PidDir,
    stderr_log: bool,
    process: P,
}

impl Supervisor<OsProcessControl> {
    /// Create a supervisor acting on real processes
    pub fn new(config: &SupervisorConfig) -> Self {
        Self::with_process_control(config, OsProcessControl)
    }
}

impl<P: ProcessControl> Supervisor<P> {
    /// Create a supervisor with a custom process collaborator
    pub fn with_process_control(config: &SupervisorConfig, process: P) -> Self {
        Self {
            pid_dir: PidDir::new(&config.pid_dir),
            stderr_log: config.stderr_log,
            process,
        }
    }

    pub fn pid_dir(&self) -> &PidDir {
        &self.pid_dir
    }

    pub fn process_control(&self) -> &P {
        &self.process
    }

    /// Marker file location for `program`
    pub fn marker_path(&self, program: &str) -> Result<PathBuf> {
        let name = marker::program_name(program)?;
        Ok(self.pid_dir.marker_path(&name))
    }

    /// Launch `program` detached and record it in a fresh marker
    ///
    /// Returns the marker that was written.
    pub fn start(&self, program: &str, args: &[String]) -> Result<MarkerRecord> {
        let name = marker::program_name(program)?;
        let marker_path = self.pid_dir.marker_path(&name);
        let log_path = self.pid_dir.log_path(&name);

        let stderr = if self.stderr_log {
            StderrTarget::LogFile(&log_path)
        } else {
            StderrTarget::Null
        };

        let pid = self.process.spawn_detached(program, args, stderr)?;

        let record = MarkerRecord::new(
            pid,
            marker_path.display().to_string(),
            chrono::Utc::now().timestamp(),
        );
        marker::write_marker(&marker_path, &record)?;

        info!("Started '{}' with pid {}", program, pid);
        Ok(record)
    }

    /// Interrupt the recorded process and delete its marker
    ///
    /// `args` is accepted for symmetry with [`Supervisor::start`] and ignored.
    /// Returns the marker that was removed.
    pub fn stop(&self, program: &str, args: &[String]) -> Result<MarkerRecord> {
        debug!("Stopping '{}' (ignoring {} args)", program, args.len());
        let marker_path = self.marker_path(program)?;
        let record = marker::read_marker(&marker_path)?;

        let handle = self.process.resolve(record.pid)?;
        self.process.interrupt(&handle)?;
        marker::remove_marker(&marker_path)?;

        info!("Stopped '{}' (pid {})", program, record.pid);
        Ok(record)
    }

    /// Report on the recorded process using the current wall clock
    pub fn sample(&self, program: &str) -> Result<Option<SampleReport>> {
        self.sample_at(program, chrono::Utc::now().timestamp())
    }

    /// Report on the recorded process as of unix time `now`
    ///
    /// Two-field markers carry no start time and produce no report.
    pub fn sample_at(&self, program: &str, now: i64) -> Result<Option<SampleReport>> {
        let marker_path = self.marker_path(program)?;
        let record = marker::read_marker(&marker_path)?;

        self.process.resolve(record.pid)?.release();

        let Some(started_at) = record.started_at else {
            debug!("Marker {} has no start time, nothing to report", record.path);
            return Ok(None);
        };

        Ok(Some(SampleReport {
            program: program.to_string(),
            pid: record.pid_field,
            marker_path: record.path,
            uptime: uptime_since(started_at, now),
        }))
    }

    /// Stop `program`, then start it again with `args`
    ///
    /// Nothing is spawned unless the stop completed.
    pub fn restart(&self, program: &str, args: &[String]) -> Result<MarkerRecord> {
        self.stop(program, args)?;
        self.start(program, args)
    }
}
