//! Path utilities for the API parser package layout.
//!
//! This module provides the canonical locations used by the resolver:
//! - Package root (where binaries and the Go sources live)
//! - Platform-specialized prebuilt binary
//! - Compiled fallback binary (an injectable build target)
//! - Go source entry point
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Pure path arithmetic: nothing here spawns processes
//! - OS-specific root detection is kept private in `platform`

mod error;
mod parser;
mod platform;

// Error type
pub use error::PathError;

// Package root detection
pub use platform::package_root;

// Parser binary layout
pub use parser::{
    COMPILED_BINARY_NAME, GO_SOURCE_RELATIVE, PREBUILT_MACOS_ARM64_NAME, ParserLayout, PathInfo,
};
