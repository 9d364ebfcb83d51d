//! Package root detection.
//!
//! The package root is the directory that holds `go/main.go`, the prebuilt
//! macOS binary and the compiled fallback binary.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::error::PathError;

/// Detect the source checkout this crate was built from.
///
/// Returns `Some(path)` while that checkout still exists on disk, `None` for
/// relocated or installed builds.
fn detect_local_repo() -> Option<PathBuf> {
    let repo_root = PathBuf::from(env!("ZEROAPI_PACKAGE_ROOT"));

    if repo_root.is_dir() && repo_root.join("Cargo.toml").exists() {
        Some(repo_root)
    } else {
        None
    }
}

/// Get the package root directory.
///
/// Resolution order:
/// 1. Local repository (if this build's checkout is still present)
/// 2. System data directory (e.g., `~/.local/share/zeroapi`), created on demand
///
/// The `ZEROAPI_PACKAGE_DIR` override is applied by
/// [`ParserConfig`](crate::config::ParserConfig) before this is consulted.
pub fn package_root() -> Result<PathBuf, PathError> {
    if let Some(repo) = detect_local_repo() {
        debug!(root = %repo.display(), "Using local repository as package root");
        return Ok(repo);
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    let root = data_dir.join("zeroapi");

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    debug!(root = %root.display(), "Using data directory as package root");
    Ok(root)
}
