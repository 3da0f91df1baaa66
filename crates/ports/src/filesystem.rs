// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

/// Capability surface of the session's simulated filesystem.
///
/// The host owns the filesystem; the command only resolves typed names
/// against the invocation's working directory, tests for directories, and
/// retrieves content.
pub trait SessionFilesystem: Send + Sync {
    /// Resolve a user-typed name against the working directory.
    fn resolve(&self, name: &str, cwd: &Path) -> PathBuf;

    fn is_directory(&self, path: &Path) -> bool;

    /// Full content of the file, or `None` when nothing is retrievable.
    fn contents(&self, path: &Path) -> Option<Vec<u8>>;
}
