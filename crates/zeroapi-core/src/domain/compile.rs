//! Result of an on-demand parser build.

use serde::Serialize;
use std::path::PathBuf;

/// One attempt at compiling the Go parser.
///
/// `output` is the build tool's merged output. Callers only surface it when
/// the build failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileAttempt {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub succeeded: bool,
    pub output: String,
}

impl CompileAttempt {
    pub fn succeeded(source_path: PathBuf, output_path: PathBuf, output: String) -> Self {
        Self {
            source_path,
            output_path,
            succeeded: true,
            output,
        }
    }

    pub fn failed(source_path: PathBuf, output_path: PathBuf, output: impl Into<String>) -> Self {
        Self {
            source_path,
            output_path,
            succeeded: false,
            output: output.into(),
        }
    }
}
