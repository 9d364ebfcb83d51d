//! Port definitions (trait abstractions) for OS-facing concerns.
//!
//! Core owns the traits; `zeroapi-runtime` owns the implementations. The
//! resolver only talks to the filesystem and the Go toolchain through these
//! seams, so tests can substitute spies and fakes.

mod probe;
mod toolchain;

pub use probe::ExecutableProbe;
pub use toolchain::ToolchainPort;
