//! Domain types for the API parser façade.
//!
//! These types are pure data: no process execution or filesystem probing.

mod compile;
mod document;
mod executable;
mod outcome;
mod platform;

pub use compile::CompileAttempt;
pub use document::{DocumentOutcome, ParsedDocument, TypeDefinition, TypeField, decode_batch};
pub use executable::ExecutableDescriptor;
pub use outcome::InvocationOutcome;
pub use platform::{OsFamily, PlatformInfo};
