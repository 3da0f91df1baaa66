// crates/ports/src/terminal.rs

/// Output surface of the emulated terminal.
pub trait SessionOutput {
    /// Write to the terminal's output stream.
    fn write(&mut self, text: &str);

    /// Write to the terminal's error stream.
    fn error(&mut self, text: &str);
}
