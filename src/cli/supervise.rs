//! Lifecycle verbs and their confirmation output

use daemonkit_core::error::DaemonkitError;
use daemonkit_core::process::ProcessControl;
use daemonkit_core::supervisor::Supervisor;

/// Run the start command
pub fn run_start<P: ProcessControl>(
    supervisor: &Supervisor<P>,
    program: &str,
    args: &[String],
) -> Result<(), DaemonkitError> {
    supervisor.start(program, args)?;
    println!("[START] '{}' -- OK!", program);
    Ok(())
}

/// Run the stop command
pub fn run_stop<P: ProcessControl>(
    supervisor: &Supervisor<P>,
    program: &str,
    args: &[String],
) -> Result<(), DaemonkitError> {
    supervisor.stop(program, args)?;
    println!("[STOP] '{}' -- OK!", program);
    Ok(())
}

/// Run the sample command; two-field markers print nothing
pub fn run_sample<P: ProcessControl>(
    supervisor: &Supervisor<P>,
    program: &str,
) -> Result<(), DaemonkitError> {
    if let Some(report) = supervisor.sample(program)? {
        println!("{}", report);
    }
    Ok(())
}

/// Run the restart command
///
/// Both confirmation lines are printed once the new process is recorded.
pub fn run_restart<P: ProcessControl>(
    supervisor: &Supervisor<P>,
    program: &str,
    args: &[String],
) -> Result<(), DaemonkitError> {
    supervisor.restart(program, args)?;
    println!("[STOP] '{}' -- OK!", program);
    println!("[START] '{}' -- OK!", program);
    Ok(())
}
