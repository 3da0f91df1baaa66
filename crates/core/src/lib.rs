// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod command;
pub mod counter;
pub mod help;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
