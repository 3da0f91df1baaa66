// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod audit;
pub mod filesystem;
pub mod terminal;

pub use audit::{JsonlRecorder, NullRecorder};
pub use filesystem::OsFilesystem;
pub use terminal::StdTerminal;
