//! The active parser executable.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Identifies the parser binary an executor runs and how it was chosen.
///
/// `auto_detected` is only ever `true` when the resolver picked the path by
/// probing; any explicit path (at construction or via [`Self::set_path`])
/// resets it to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutableDescriptor {
    path: PathBuf,
    auto_detected: bool,
}

impl ExecutableDescriptor {
    /// Descriptor for a caller-supplied path.
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            auto_detected: false,
        }
    }

    /// Descriptor for a path chosen by auto-detection.
    pub fn auto_detected(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            auto_detected: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn is_auto_detected(&self) -> bool {
        self.auto_detected
    }

    /// Replace the path. Always clears the auto-detected flag.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
        self.auto_detected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_path_resets_auto_detected() {
        let mut descriptor = ExecutableDescriptor::auto_detected("/pkg/api-parser-compiled");
        assert!(descriptor.is_auto_detected());

        descriptor.set_path("/usr/local/bin/api-parser");

        assert!(!descriptor.is_auto_detected());
        assert_eq!(descriptor.path(), Path::new("/usr/local/bin/api-parser"));
    }

    #[test]
    fn test_explicit_is_not_auto_detected() {
        assert!(!ExecutableDescriptor::explicit("/bin/true").is_auto_detected());
    }
}
