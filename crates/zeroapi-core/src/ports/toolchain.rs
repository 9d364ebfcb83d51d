//! Build toolchain port.
//!
//! # Design Notes
//!
//! - Probing and compiling are plain side effects with no caching: every
//!   resolution asks again
//! - `compile` reports failure as data (`succeeded == false`) so the caller
//!   decides whether to fall back

use std::path::Path;

use crate::domain::CompileAttempt;

/// Port for detecting and driving the toolchain that builds the parser.
pub trait ToolchainPort: Send + Sync {
    /// Human-readable toolchain name (e.g. `go`).
    fn name(&self) -> &'static str;

    /// Query the toolchain version.
    ///
    /// `Some(version)` only when the version command exits zero with
    /// non-empty output.
    fn version(&self) -> Option<String>;

    /// Convenience wrapper over [`Self::version`].
    fn is_available(&self) -> bool {
        self.version().is_some()
    }

    /// Compile `source` into the executable `output`.
    fn compile(&self, source: &Path, output: &Path) -> CompileAttempt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Mock implementation for testing.
    struct MockToolchain {
        version: Option<String>,
    }

    impl ToolchainPort for MockToolchain {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn version(&self) -> Option<String> {
            self.version.clone()
        }

        fn compile(&self, source: &Path, output: &Path) -> CompileAttempt {
            CompileAttempt::failed(source.to_path_buf(), output.to_path_buf(), "not supported")
        }
    }

    #[test]
    fn test_availability_follows_version() {
        let present = MockToolchain {
            version: Some("go1.22.3".to_string()),
        };
        let absent = MockToolchain { version: None };

        assert!(present.is_available());
        assert!(!absent.is_available());

        let attempt = absent.compile(Path::new("go/main.go"), Path::new("out"));
        assert!(!attempt.succeeded);
        assert_eq!(attempt.output_path, PathBuf::from("out"));
    }
}
