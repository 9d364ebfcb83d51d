//! `zeroapi` command-line adapter.
//!
//! Wires environment configuration and CLI flags into the runtime and prints
//! parser results as JSON.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by main.rs binary
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

pub use bootstrap::{CliContext, bootstrap};
pub use commands::{Commands, Section};
pub use error::CliError;
pub use parser::Cli;
