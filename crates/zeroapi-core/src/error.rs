//! Error types shared by every zeroapi component.
//!
//! One enum covers resolution, invocation and decoding so callers can match
//! on a single taxonomy regardless of which layer failed.

use std::path::PathBuf;
use thiserror::Error;

use crate::paths::PathError;

/// Errors that can occur while resolving, running or decoding the API parser.
#[derive(Debug, Error)]
pub enum ParserError {
    // === Invocation ===
    /// The `.api` input file does not exist. Raised before any process is spawned.
    #[error("API file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// The parser exited with a non-zero status. `output` is the merged
    /// stdout/stderr of the child, verbatim.
    #[error("API parse execution failed: {output}")]
    ExecutionFailed { path: PathBuf, output: String },

    /// The parser could not be launched at all.
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Resolution ===
    /// An explicitly supplied executable path does not exist.
    #[error("API parser executable not found: {path}")]
    MissingExecutable { path: PathBuf },

    /// The executable exists but lacks execute permission.
    #[error("API parser file is not executable: {path}")]
    NotExecutable { path: PathBuf },

    /// No binary was found and no Go toolchain is available to build one.
    /// The payload is the full, platform-specific installation guidance.
    #[error("{guidance}")]
    ToolchainUnavailable { guidance: String },

    /// A Go toolchain was found but building the parser failed.
    #[error("Failed to compile API parser from {entry}:\n{output}")]
    CompileFailed { entry: PathBuf, output: String },

    // === Decoding ===
    /// The parser succeeded but its output is not a JSON document.
    #[error("JSON decode failed: {reason}\nRaw output: {raw}")]
    DecodeFailed { reason: String, raw: String },

    // === Plumbing ===
    /// Package root resolution failed.
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParserError {
    /// Create a `DecodeFailed` error from a decoder diagnostic and the raw text.
    pub fn decode_failed(reason: impl std::fmt::Display, raw: impl Into<String>) -> Self {
        Self::DecodeFailed {
            reason: reason.to_string(),
            raw: raw.into(),
        }
    }
}

/// Result type alias for parser operations
pub type ParserResult<T> = Result<T, ParserError>;
