//! Filesystem checks for parser executables.

use std::path::Path;

use zeroapi_core::{ExecutableProbe, ParserError, ParserResult};

/// Whether `path` is a regular file the platform would let us execute.
///
/// On Unix this requires at least one execute bit; elsewhere any regular
/// file counts.
pub fn is_executable_file(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .is_ok_and(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
    }

    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

/// [`ExecutableProbe`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsExecutableProbe;

impl ExecutableProbe for FsExecutableProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_executable(&self, path: &Path) -> bool {
        is_executable_file(path)
    }
}

/// Check a caller-supplied executable path through `probe`.
pub(crate) fn check_with(probe: &dyn ExecutableProbe, path: &Path) -> ParserResult<()> {
    if !probe.exists(path) {
        return Err(ParserError::MissingExecutable {
            path: path.to_path_buf(),
        });
    }

    if !probe.is_executable(path) {
        return Err(ParserError::NotExecutable {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Validate that `path` exists and is executable.
pub fn validate_executable(path: &Path) -> ParserResult<()> {
    check_with(&FsExecutableProbe, path)
}
