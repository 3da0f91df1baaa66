// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ShellWcError {
    /// Adds human context while preserving the original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ShellWcError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, ShellWcError>;

/// Domain-layer specific errors.
///
/// `InvalidOption` is rendered into the emulated terminal's diagnostic line
/// and never crosses the host boundary; `InvalidUtf8` is the opposite, it
/// propagates to the host and is never shown on the emulated terminal.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid option -- '{option}'")]
    InvalidOption { option: String },

    #[error("Input is not valid UTF-8: {source}")]
    InvalidUtf8 {
        #[source]
        source: std::str::Utf8Error,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to open audit log '{path}': {source}")]
    AuditOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read session input: {source}")]
    InputRead {
        #[source]
        source: std::io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ShellWcError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ShellWcError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ShellWcError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
