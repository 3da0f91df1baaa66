// crates/infra/src/filesystem.rs
use std::fs;
use std::path::{Component, Path, PathBuf};

use shell_wc_ports::filesystem::SessionFilesystem;

/// `SessionFilesystem` over the host operating system.
///
/// Resolution is purely lexical, the way a shell emulator resolves typed
/// names: `.` and `..` collapse without consulting the disk, and absolute
/// names ignore the working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl SessionFilesystem for OsFilesystem {
    fn resolve(&self, name: &str, cwd: &Path) -> PathBuf {
        let candidate = Path::new(name);
        let joined =
            if candidate.is_absolute() { candidate.to_path_buf() } else { cwd.join(candidate) };
        normalize(&joined)
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        fs::read(path).ok()
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root, like shell resolution.
                if resolved.parent().is_some() {
                    resolved.pop();
                }
            }
            other => resolved.push(other),
        }
    }
    resolved
}
