//! # Ports
//!
//! Interface definitions for the session host's collaborators.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: name resolution and content retrieval in the
//!   session's simulated filesystem
//! - [`audit`]: recording of observed input events
//! - [`terminal`]: the emulated terminal's output and error streams
//!
//! These ports keep the command logic independent of any particular host.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod audit;
pub mod filesystem;
pub mod terminal;
