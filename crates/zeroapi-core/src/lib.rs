//! Core domain types and port definitions for zeroapi.
//!
//! zeroapi wraps the external go-zero `.api` parser executable. This crate
//! holds everything that does not touch a subprocess:
//!
//! - [`domain`]: executable descriptors, invocation outcomes, the decoded
//!   [`ParsedDocument`] and its section views, platform detection
//! - [`paths`]: package-relative layout of the parser binaries and sources
//! - [`ports`]: traits implemented by `zeroapi-runtime` (filesystem probe, toolchain)
//! - [`config`]: environment-driven configuration
//! - [`error`]: the shared [`ParserError`] taxonomy

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod error;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use config::ParserConfig;
pub use domain::{
    CompileAttempt, DocumentOutcome, ExecutableDescriptor, InvocationOutcome, OsFamily,
    ParsedDocument, PlatformInfo, TypeDefinition, TypeField, decode_batch,
};
pub use error::{ParserError, ParserResult};
pub use paths::{ParserLayout, PathError, package_root};
pub use ports::{ExecutableProbe, ToolchainPort};
