//! PID marker files
//!
//! A marker is a single comma-separated line, `pid,markerpath,startedat`,
//! stored as `<pid_dir><name>.pid`. Older markers omit the timestamp. The
//! marker is the only state the supervisor keeps; nothing is cached between
//! calls.

use std::fmt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use tracing::{debug, warn};

use crate::error::MarkerError;

/// Permission bits for newly written markers
pub const MARKER_MODE: u32 = 0o644;

/// Directory holding marker and log files, always separator-terminated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PidDir {
    base: String,
}

impl PidDir {
    /// Create a new PID directory, appending a trailing separator if missing
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let mut base = dir.as_ref().to_string_lossy().into_owned();
        if !base.ends_with(MAIN_SEPARATOR) {
            base.push(MAIN_SEPARATOR);
        }
        Self { base }
    }

    /// The normalized directory string, including the trailing separator
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Marker file for a program name
    pub fn marker_path(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("{}{}.pid", self.base, name))
    }

    /// Stderr log file for a program name
    pub fn log_path(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("{}{}.log", self.base, name))
    }
}

/// Name used for a program's marker and log files: the last path component
pub fn program_name(program: &str) -> Result<String, MarkerError> {
    Path::new(program)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| MarkerError::InvalidProgram {
            program: program.to_string(),
        })
}

/// Contents of a marker file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRecord {
    /// Process identifier; 0 when the stored field was not numeric
    pub pid: i32,

    /// The pid field exactly as stored
    pub pid_field: String,

    /// The marker file's own path as written inside the file
    pub path: String,

    /// Unix launch timestamp, absent in two-field markers
    pub started_at: Option<i64>,
}

impl MarkerRecord {
    /// Create a record for a freshly spawned process
    pub fn new(pid: i32, path: impl Into<String>, started_at: i64) -> Self {
        Self {
            pid,
            pid_field: pid.to_string(),
            path: path.into(),
            started_at: Some(started_at),
        }
    }

    /// Parse marker contents read from `source`
    ///
    /// The path may itself contain commas. When the stored path matches
    /// `source` it is taken verbatim; otherwise the first field is the pid,
    /// the last is the timestamp, and everything between is the path.
    /// Non-numeric pid and timestamp fields are not rejected; they read as 0.
    pub fn parse(content: &str, source: &Path) -> Result<Self, MarkerError> {
        let malformed = || MarkerError::Malformed {
            path: source.display().to_string(),
            content: content.to_string(),
        };

        let (pid_field, rest) = content.trim_end().split_once(',').ok_or_else(malformed)?;
        let source_str = source.display().to_string();

        let (path, timestamp) = if rest == source_str {
            (rest, None)
        } else if let Some(ts) = rest
            .strip_prefix(source_str.as_str())
            .and_then(|tail| tail.strip_prefix(','))
        {
            (source_str.as_str(), Some(ts))
        } else {
            match rest.rsplit_once(',') {
                Some((path, ts)) => (path, Some(ts)),
                None => (rest, None),
            }
        };

        let pid = pid_field.parse::<i32>().unwrap_or_else(|_| {
            warn!(
                "Non-numeric pid field {:?} in {}, using 0",
                pid_field,
                source.display()
            );
            0
        });

        let started_at = timestamp.map(|raw| {
            raw.parse::<i64>().unwrap_or_else(|_| {
                warn!(
                    "Non-numeric timestamp {:?} in {}, using 0",
                    raw,
                    source.display()
                );
                0
            })
        });

        Ok(Self {
            pid,
            pid_field: pid_field.to_string(),
            path: path.to_string(),
            started_at,
        })
    }
}

impl fmt::Display for MarkerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.started_at {
            Some(ts) => write!(f, "{},{},{}", self.pid_field, self.path, ts),
            None => write!(f, "{},{}", self.pid_field, self.path),
        }
    }
}

/// Read and parse the marker at `path`
pub fn read_marker(path: &Path) -> Result<MarkerRecord, MarkerError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MarkerError::NotFound {
            path: path.display().to_string(),
        },
        _ => MarkerError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })?;

    debug!("Read marker {}: {:?}", path.display(), content);
    MarkerRecord::parse(&content, path)
}

/// Write `record` to `path`, replacing any previous marker
pub fn write_marker(path: &Path, record: &MarkerRecord) -> Result<(), MarkerError> {
    let write_failed = |e: std::io::Error| MarkerError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(MARKER_MODE)
        .open(path)
        .map_err(write_failed)?;
    file.write_all(record.to_string().as_bytes())
        .map_err(write_failed)?;

    debug!("Wrote marker {}: {}", path.display(), record);
    Ok(())
}

/// Delete the marker at `path`
pub fn remove_marker(path: &Path) -> Result<(), MarkerError> {
    fs::remove_file(path).map_err(|e| MarkerError::RemoveFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
