use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod host;

use host::HostConfig;

/// Host harness that runs the emulated `wc` against this process's stdio.
#[derive(Debug, Parser)]
#[command(
    name = "shell-wc",
    version,
    about = "Runs the emulated wc command against this process's stdio"
)]
struct HostArgs {
    /// Working directory the emulated command resolves file names against.
    #[arg(long, value_name = "DIR")]
    cwd: Option<PathBuf>,

    /// Append one JSON line per observed input event to this file.
    #[arg(long, value_name = "FILE")]
    audit: Option<PathBuf>,

    /// Argument vector handed to the emulated command. Use `--` to pass
    /// flags that collide with the host's own, e.g. `-- --help`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARG")]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let host_args = HostArgs::parse();
    let cwd = host_args
        .cwd
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    let config = HostConfig { cwd, audit: host_args.audit, args: host_args.args };

    match host::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shell-wc: {err}");
            ExitCode::FAILURE
        }
    }
}
