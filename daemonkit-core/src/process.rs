//! Operating system process collaborator
//!
//! Spawning, handle resolution and signal delivery sit behind the
//! [`ProcessControl`] trait so the supervisor can be driven against a fake in
//! tests.

use std::fs::File;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Stdio};

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use tracing::{debug, info};

use crate::error::ProcessError;

/// Handle to a process identified by pid
///
/// Holding a handle does not imply the process exists. Dropping it or calling
/// [`ProcessHandle::release`] leaves no tracking relationship behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessHandle {
    pid: i32,
}

impl ProcessHandle {
    pub fn new(pid: i32) -> Self {
        Self { pid }
    }

    pub fn pid(&self) -> i32 {
        self.pid
    }

    /// Give up the handle without signalling or waiting on the process
    pub fn release(self) {
        debug!("Released handle for process {}", self.pid);
    }
}

/// Where a spawned program's stderr goes; stdin and stdout are always null
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StderrTarget<'a> {
    /// Discard stderr
    Null,
    /// Write stderr to this file, truncating it first
    LogFile(&'a Path),
}

/// Process operations the supervisor depends on
pub trait ProcessControl {
    /// Launch `program` detached from the caller's session and return its pid
    ///
    /// The implementation must not retain the child: the caller never waits
    /// on it.
    fn spawn_detached(
        &self,
        program: &str,
        args: &[String],
        stderr: StderrTarget<'_>,
    ) -> Result<i32, ProcessError>;

    /// Obtain a handle for `pid`
    fn resolve(&self, pid: i32) -> Result<ProcessHandle, ProcessError>;

    /// Deliver SIGINT to the process behind `handle`
    fn interrupt(&self, handle: &ProcessHandle) -> Result<(), ProcessError>;
}

/// [`ProcessControl`] backed by the host operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct OsProcessControl;

impl ProcessControl for OsProcessControl {
    fn spawn_detached(
        &self,
        program: &str,
        args: &[String],
        stderr: StderrTarget<'_>,
    ) -> Result<i32, ProcessError> {
        let stderr = match stderr {
            StderrTarget::Null => Stdio::null(),
            StderrTarget::LogFile(path) => {
                let log = File::create(path).map_err(|e| ProcessError::LogFileFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
                Stdio::from(log)
            }
        };

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(stderr);

        // New session: the child loses the controlling terminal and does not
        // receive signals aimed at the supervisor's process group. SIGINT goes
        // back to default since an inherited SIG_IGN would survive exec.
        unsafe {
            cmd.pre_exec(|| {
                libc::setsid();
                libc::signal(libc::SIGINT, libc::SIG_DFL);
                Ok(())
            });
        }

        let child = cmd.spawn().map_err(|e| ProcessError::SpawnFailed {
            program: program.to_string(),
            reason: e.to_string(),
        })?;

        let pid = child.id() as i32;
        info!("Spawned '{}' as process {}", program, pid);

        // Dropping `Child` neither kills nor waits on the process
        drop(child);
        Ok(pid)
    }

    fn resolve(&self, pid: i32) -> Result<ProcessHandle, ProcessError> {
        // Unix has no handle to acquire; existence is only checked on signal
        Ok(ProcessHandle::new(pid))
    }

    fn interrupt(&self, handle: &ProcessHandle) -> Result<(), ProcessError> {
        let pid = handle.pid();
        // kill(2) with pid <= 0 addresses process groups, never a single process
        if pid <= 0 {
            return Err(ProcessError::NotInitialized { pid });
        }

        kill(Pid::from_raw(pid), Signal::SIGINT).map_err(|e| ProcessError::SignalFailed {
            pid,
            reason: e.to_string(),
        })?;

        info!("Sent SIGINT to process {}", pid);
        Ok(())
    }
}
