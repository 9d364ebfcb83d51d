//! Filesystem probe port.

use std::path::Path;

/// Answers "is there a runnable file here?" for the resolver.
pub trait ExecutableProbe: Send + Sync {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a file the platform marks executable.
    fn is_executable(&self, path: &Path) -> bool;
}
