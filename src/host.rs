// src/host.rs
use std::fs::File;
use std::io::{self, BufRead, IsTerminal, Read};
use std::path::{Path, PathBuf};

use shell_wc_core::command::{ExecEnv, Flow, WcCommand};
use shell_wc_infra::{JsonlRecorder, NullRecorder, OsFilesystem, StdTerminal};
use shell_wc_ports::audit::InputRecorder;
use shell_wc_shared_kernel::{ErrorContext, InfrastructureError, Result};

pub struct HostConfig {
    pub cwd: PathBuf,
    pub audit: Option<PathBuf>,
    pub args: Vec<String>,
}

/// Run one emulated invocation against this process's stdio.
pub fn run(config: &HostConfig) -> Result<()> {
    let recorder = build_recorder(config.audit.as_deref())?;
    let fs = OsFilesystem;
    let mut terminal = StdTerminal;
    let env = ExecEnv { fs: &fs, recorder: recorder.as_ref(), cwd: &config.cwd };
    let mut command = WcCommand::new(env);

    let pipeline = read_pipeline()?;
    if command.start(&config.args, pipeline.as_deref(), &mut terminal)? == Flow::Done {
        return Ok(());
    }

    if pipeline.is_none() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.map_err(|source| InfrastructureError::InputRead { source })?;
            command.line_received(&line);
        }
    }
    command.end_of_input(&mut terminal)
}

/// Piped stdin becomes pre-supplied pipeline content; an interactive
/// terminal is instead drained line by line after `start`.
fn read_pipeline() -> Result<Option<Vec<u8>>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut data = Vec::new();
    stdin
        .lock()
        .read_to_end(&mut data)
        .map_err(|source| InfrastructureError::InputRead { source })?;
    Ok((!data.is_empty()).then_some(data))
}

fn build_recorder(audit: Option<&Path>) -> Result<Box<dyn InputRecorder>> {
    match audit {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| InfrastructureError::AuditOpen {
                    path: path.to_path_buf(),
                    source,
                })
                .context("starting session audit")?;
            Ok(Box::new(JsonlRecorder::new(file)))
        }
        None => Ok(Box::new(NullRecorder)),
    }
}
