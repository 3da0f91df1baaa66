// crates/ports/src/audit.rs
use serde::{Deserialize, Serialize};

/// Where an input event originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    Terminal,
    Pipe,
}

/// One observed input event, surfaced to the audit sink before it is
/// appended to the invocation's buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub source: InputSource,
    pub content: Vec<u8>,
}

impl InputEvent {
    pub fn terminal(content: impl Into<Vec<u8>>) -> Self {
        Self { source: InputSource::Terminal, content: content.into() }
    }

    pub fn pipe(content: impl Into<Vec<u8>>) -> Self {
        Self { source: InputSource::Pipe, content: content.into() }
    }
}

/// Port for the session's audit sink. Recording must not fail the session.
pub trait InputRecorder: Send + Sync {
    fn record(&self, event: &InputEvent);
}
