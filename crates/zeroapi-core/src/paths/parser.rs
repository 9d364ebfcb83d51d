//! API parser binary layout.
//!
//! Provides the package-relative locations of the prebuilt parser, the
//! compiled fallback binary and the Go source entry point.

use std::env;
use std::path::PathBuf;

use serde::Serialize;

use super::error::PathError;

/// File name of the prebuilt Apple Silicon binary.
pub const PREBUILT_MACOS_ARM64_NAME: &str = "api-parser-macos-arm64";

/// File name (without platform suffix) of the binary produced by on-demand builds.
pub const COMPILED_BINARY_NAME: &str = "api-parser-compiled";

/// Location of the Go entry point relative to the package root.
pub const GO_SOURCE_RELATIVE: &str = "go/main.go";

/// Package-relative locations used by the resolver.
///
/// The compiled binary path is a build *target*, not derived state: tests and
/// embedders redirect it with [`ParserLayout::with_compiled_binary`] so that
/// on-demand builds never write into a shared location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParserLayout {
    /// Directory holding binaries and Go sources
    pub package_root: PathBuf,
    /// Platform-specialized prebuilt binary (macOS arm64 only)
    pub prebuilt_macos_arm64: PathBuf,
    /// Target of on-demand compilation and second probe location
    pub compiled_binary: PathBuf,
    /// Go source entry point compiled on demand
    pub go_source: PathBuf,
}

impl ParserLayout {
    /// Build the default layout under `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let package_root = root.into();

        Self {
            prebuilt_macos_arm64: package_root.join(PREBUILT_MACOS_ARM64_NAME),
            compiled_binary: package_root
                .join(format!("{COMPILED_BINARY_NAME}{}", env::consts::EXE_SUFFIX)),
            go_source: package_root.join(GO_SOURCE_RELATIVE),
            package_root,
        }
    }

    /// Redirect the on-demand build output.
    #[must_use]
    pub fn with_compiled_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.compiled_binary = path.into();
        self
    }

    /// Use a different Go entry point.
    #[must_use]
    pub fn with_go_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.go_source = path.into();
        self
    }

    /// Collect existence information for every candidate path.
    pub fn path_info(&self) -> Result<PathInfo, PathError> {
        let working_directory =
            env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?;

        Ok(PathInfo {
            layout: self.clone(),
            working_directory,
            package_root_exists: self.package_root.is_dir(),
            prebuilt_exists: self.prebuilt_macos_arm64.exists(),
            compiled_exists: self.compiled_binary.exists(),
            go_source_exists: self.go_source.exists(),
        })
    }
}

impl std::fmt::Display for ParserLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "package_root = {}", self.package_root.display())?;
        writeln!(
            f,
            "prebuilt_macos_arm64 = {}",
            self.prebuilt_macos_arm64.display()
        )?;
        writeln!(f, "compiled_binary = {}", self.compiled_binary.display())?;
        write!(f, "go_source = {}", self.go_source.display())
    }
}

/// Debug snapshot of the layout plus what actually exists on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathInfo {
    pub layout: ParserLayout,
    pub working_directory: PathBuf,
    pub package_root_exists: bool,
    pub prebuilt_exists: bool,
    pub compiled_exists: bool,
    pub go_source_exists: bool,
}

impl std::fmt::Display for PathInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.layout)?;
        writeln!(
            f,
            "working_directory = {}",
            self.working_directory.display()
        )?;
        writeln!(f, "package_root_exists = {}", self.package_root_exists)?;
        writeln!(f, "prebuilt_exists = {}", self.prebuilt_exists)?;
        writeln!(f, "compiled_exists = {}", self.compiled_exists)?;
        write!(f, "go_source_exists = {}", self.go_source_exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_layout_from_root() {
        let layout = ParserLayout::from_root("/opt/zeroapi");

        assert_eq!(
            layout.prebuilt_macos_arm64,
            PathBuf::from("/opt/zeroapi/api-parser-macos-arm64")
        );
        assert_eq!(layout.go_source, PathBuf::from("/opt/zeroapi/go/main.go"));

        #[cfg(target_os = "windows")]
        assert!(
            layout
                .compiled_binary
                .to_string_lossy()
                .ends_with("api-parser-compiled.exe")
        );

        #[cfg(not(target_os = "windows"))]
        assert_eq!(
            layout.compiled_binary,
            PathBuf::from("/opt/zeroapi/api-parser-compiled")
        );
    }

    #[test]
    fn test_compiled_binary_override() {
        let layout = ParserLayout::from_root("/opt/zeroapi").with_compiled_binary("/tmp/out/parser");
        assert_eq!(layout.compiled_binary, PathBuf::from("/tmp/out/parser"));
        assert_eq!(layout.package_root, PathBuf::from("/opt/zeroapi"));
    }

    #[test]
    fn test_path_info_reports_existence() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("go")).unwrap();
        fs::write(dir.path().join("go/main.go"), "package main\n").unwrap();

        let info = ParserLayout::from_root(dir.path()).path_info().unwrap();

        assert!(info.package_root_exists);
        assert!(info.go_source_exists);
        assert!(!info.prebuilt_exists);
        assert!(!info.compiled_exists);
        assert_eq!(info.layout.package_root, dir.path());
    }

    #[test]
    fn display_format_is_parseable() {
        let output = ParserLayout::from_root("/opt/zeroapi").to_string();

        assert!(output.contains("package_root = "));
        assert!(output.contains("prebuilt_macos_arm64 = "));
        assert!(output.contains("compiled_binary = "));
        assert!(output.contains("go_source = "));
    }
}
