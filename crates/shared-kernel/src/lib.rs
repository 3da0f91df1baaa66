// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod value_objects;

pub use error::{
    DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, Result, ShellWcError,
};
pub use value_objects::{ByteCount, CharCount, LineCount, WordCount};
