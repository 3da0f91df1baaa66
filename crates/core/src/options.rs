// crates/core/src/options.rs
use serde::{Deserialize, Serialize};
use shell_wc_shared_kernel::{DomainError, DomainResult};

/// One count dimension, selected by a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Lines,
    Words,
    Chars,
    Bytes,
}

/// Ordered, duplicate-free list of count dimensions.
///
/// Output column order follows the order flags were parsed, so this is a
/// sequence, not a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeList(Vec<Mode>);

impl ModeList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a mode unless it is already selected.
    pub fn push(&mut self, mode: Mode) {
        if !self.0.contains(&mode) {
            self.0.push(mode);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<Mode> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Mode> + '_ {
        self.0.iter().copied()
    }
}

impl Default for ModeList {
    /// `lines words bytes`, the order printed when no count flag is given.
    fn default() -> Self {
        Self(vec![Mode::Lines, Mode::Words, Mode::Bytes])
    }
}

/// Outcome of a successfully validated argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `--help` was present; print the usage text and stop.
    Help,
    Counts { modes: ModeList, targets: Vec<String> },
}

/// Validate and interpret an emulated `wc` argument vector.
///
/// The whole vector is validated before anything takes effect, like getopt:
/// the first unrecognized or malformed option aborts with no partial state.
/// Options and positionals may be intermixed; `--` ends option parsing and
/// a lone `-` is a positional.
pub fn parse(args: &[String]) -> DomainResult<Invocation> {
    let mut modes = ModeList::new();
    let mut targets = Vec::new();
    let mut help = false;
    let mut options_done = false;

    for arg in args {
        if options_done || arg == "-" || !arg.starts_with('-') {
            targets.push(arg.clone());
        } else if arg == "--" {
            options_done = true;
        } else if let Some(long) = arg.strip_prefix("--") {
            let (name, value) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (long, None),
            };
            // None of the recognized long options take a value.
            if value.is_some() {
                return Err(DomainError::InvalidOption { option: name.to_string() });
            }
            match name {
                "bytes" => modes.push(Mode::Bytes),
                "chars" => modes.push(Mode::Chars),
                "lines" => modes.push(Mode::Lines),
                "words" => modes.push(Mode::Words),
                "help" => help = true,
                // Advertised in the usage text but deliberately inert.
                "version" | "max-line-length" => {}
                _ => return Err(DomainError::InvalidOption { option: name.to_string() }),
            }
        } else {
            for flag in arg.chars().skip(1) {
                match flag {
                    'c' => modes.push(Mode::Bytes),
                    'm' => modes.push(Mode::Chars),
                    'l' => modes.push(Mode::Lines),
                    'w' => modes.push(Mode::Words),
                    'L' => {}
                    other => {
                        return Err(DomainError::InvalidOption { option: other.to_string() });
                    }
                }
            }
        }
    }

    if help {
        return Ok(Invocation::Help);
    }
    if modes.is_empty() {
        modes = ModeList::default();
    }
    Ok(Invocation::Counts { modes, targets })
}
