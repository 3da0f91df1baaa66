// crates/core/src/command.rs
use std::path::Path;

use shell_wc_ports::audit::{InputEvent, InputRecorder};
use shell_wc_ports::filesystem::SessionFilesystem;
use shell_wc_ports::terminal::SessionOutput;
use shell_wc_shared_kernel::Result;

use crate::counter;
use crate::help;
use crate::options::{self, Invocation, ModeList};
use crate::presentation;

/// Name under which diagnostics are reported.
const TOOL_NAME: &str = "wc";

/// Collaborators for one command invocation, owned by the session host.
pub struct ExecEnv<'a> {
    pub fs: &'a dyn SessionFilesystem,
    pub recorder: &'a dyn InputRecorder,
    pub cwd: &'a Path,
}

/// Whether the invocation still expects input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Waiting for terminal lines or pipe chunks, then an end-of-input
    /// signal.
    Pending,
    /// Output (or a diagnostic) has been produced; further events are
    /// ignored.
    Done,
}

/// One in-flight `wc` invocation, driven by the session host's events.
///
/// Exactly one of buffer-driven or file-target-driven counting happens per
/// invocation: pre-supplied pipeline content wins over positional targets,
/// and event buffering only applies when neither is present. The buffer is
/// always initialized and counted at most once.
pub struct WcCommand<'a> {
    env: ExecEnv<'a>,
    modes: ModeList,
    buffer: Vec<u8>,
    state: Flow,
}

impl<'a> WcCommand<'a> {
    pub fn new(env: ExecEnv<'a>) -> Self {
        Self { env, modes: ModeList::default(), buffer: Vec::new(), state: Flow::Pending }
    }

    /// Parse the argument vector and either complete immediately (help, bad
    /// option, file targets) or start collecting input events.
    pub fn start(
        &mut self,
        args: &[String],
        pipeline: Option<&[u8]>,
        out: &mut dyn SessionOutput,
    ) -> Result<Flow> {
        let invocation = match options::parse(args) {
            Ok(invocation) => invocation,
            Err(err) => {
                out.error(&format!(
                    "{TOOL_NAME}: {err}\nTry '{TOOL_NAME} --help' for more information.\n"
                ));
                return Ok(self.finish());
            }
        };

        match invocation {
            Invocation::Help => {
                out.write(help::USAGE);
                Ok(self.finish())
            }
            Invocation::Counts { modes, targets } => {
                self.modes = modes;
                if let Some(content) = pipeline {
                    self.env.recorder.record(&InputEvent::terminal(content));
                    self.buffer.extend_from_slice(content);
                    Ok(Flow::Pending)
                } else if targets.is_empty() {
                    Ok(Flow::Pending)
                } else {
                    for target in &targets {
                        self.count_target(target, out)?;
                    }
                    Ok(self.finish())
                }
            }
        }
    }

    /// A full line typed at the emulated terminal; a separator is appended.
    pub fn line_received(&mut self, line: &str) {
        if self.state == Flow::Done {
            return;
        }
        self.env.recorder.record(&InputEvent::terminal(line.as_bytes()));
        self.buffer.extend_from_slice(line.as_bytes());
        self.buffer.push(b'\n');
    }

    /// A raw chunk from an upstream pipe stage, appended verbatim.
    pub fn pipe_received(&mut self, chunk: &[u8]) {
        if self.state == Flow::Done {
            return;
        }
        self.env.recorder.record(&InputEvent::pipe(chunk));
        self.buffer.extend_from_slice(chunk);
    }

    /// End-of-input: count the accumulated buffer exactly once, even when
    /// empty, with no filename label.
    pub fn end_of_input(&mut self, out: &mut dyn SessionOutput) -> Result<()> {
        if self.state == Flow::Done {
            return Ok(());
        }
        let values = counter::count_modes(&self.modes, &self.buffer)?;
        out.write(&presentation::format_counts(&values, None));
        self.finish();
        Ok(())
    }

    fn count_target(&self, name: &str, out: &mut dyn SessionOutput) -> Result<()> {
        let path = self.env.fs.resolve(name, self.env.cwd);
        if self.env.fs.is_directory(&path) {
            out.error(&format!("{TOOL_NAME}: {name}: Is a directory\n"));
            return Ok(());
        }
        match self.env.fs.contents(&path) {
            Some(content) if !content.is_empty() => {
                let values = counter::count_modes(&self.modes, &content)?;
                let label = path.display().to_string();
                out.write(&presentation::format_counts(&values, Some(&label)));
            }
            // Empty content reports the same way as a missing file.
            _ => out.error(&format!("{TOOL_NAME}: {name}: No such file or directory\n")),
        }
        Ok(())
    }

    fn finish(&mut self) -> Flow {
        self.state = Flow::Done;
        Flow::Done
    }
}
