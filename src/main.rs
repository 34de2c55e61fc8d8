//! daemonkit - minimal daemon supervisor
//!
//! Launches programs detached from the terminal, tracks them through PID
//! marker files, and signals, samples or restarts them later.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use daemonkit_core::config::toml_config::{
    apply_pid_dir_override, load_config, load_config_from_path,
};
use daemonkit_core::error::DaemonkitError;
use daemonkit_core::init_logging;
use daemonkit_core::supervisor::Supervisor;

mod cli;

const USAGE: &str = "usage: daemonkit {start|sample|stop|restart} prog ...args";

#[derive(Parser)]
#[command(name = "daemonkit", version)]
#[command(about = "Start, stop, sample and restart detached programs via PID marker files")]
struct Cli {
    /// Directory for marker and log files (overrides config and DAEMONKIT_PID_DIR)
    #[arg(long, value_name = "DIR")]
    pid_dir: Option<PathBuf>,

    /// Configuration file (default: ~/.config/daemonkit/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log lifecycle events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Lifecycle action
    #[arg(value_enum)]
    action: Action,

    /// Program to supervise
    program: String,

    /// Arguments passed through to the program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Action {
    /// Launch the program detached and record its pid
    Start,
    /// Interrupt the recorded process and remove its marker
    Stop,
    /// Print pid, marker path and uptime
    Sample,
    /// Stop, then start again
    Restart,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", USAGE);
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("**{}", e);
            std::process::exit(1);
        }
    }
}

fn run(opts: Cli) -> Result<(), DaemonkitError> {
    let config = match opts.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config()?,
    };
    let config = apply_pid_dir_override(config, opts.pid_dir)?;
    tracing::debug!("Using marker directory {:?}", config.pid_dir);
    let supervisor = Supervisor::new(&config);

    match opts.action {
        Action::Start => cli::supervise::run_start(&supervisor, &opts.program, &opts.args),
        Action::Stop => cli::supervise::run_stop(&supervisor, &opts.program, &opts.args),
        Action::Sample => cli::supervise::run_sample(&supervisor, &opts.program),
        Action::Restart => cli::supervise::run_restart(&supervisor, &opts.program, &opts.args),
    }
}
