// crates/infra/src/terminal.rs
use std::io::{self, Write};

use shell_wc_ports::terminal::SessionOutput;

/// Terminal adapter over the process stdout/stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdTerminal;

impl SessionOutput for StdTerminal {
    fn write(&mut self, text: &str) {
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    fn error(&mut self, text: &str) {
        let mut stderr = io::stderr().lock();
        let _ = stderr.write_all(text.as_bytes());
        let _ = stderr.flush();
    }
}
