//! Operating system and CPU architecture detection.

use serde::Serialize;

/// Architecture identifiers that count as 64-bit ARM.
const ARM64_IDENTIFIERS: &[&str] = &["aarch64", "arm64"];

/// Operating system family, used to pick installation guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OsFamily {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl OsFamily {
    /// Get the display name for this OS family
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
            Self::Windows => "Windows",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The platform the resolver probes for.
///
/// [`PlatformInfo::detect`] reads the running build target; tests construct
/// arbitrary platforms with [`PlatformInfo::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    pub os: String,
    pub arch: String,
}

impl PlatformInfo {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Platform of the current process.
    pub fn detect() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Classify the OS name. Accepts both Rust target names and `uname -s` spellings.
    pub fn family(&self) -> OsFamily {
        match self.os.to_ascii_lowercase().as_str() {
            "macos" | "darwin" => OsFamily::MacOs,
            "linux" => OsFamily::Linux,
            "windows" | "winnt" => OsFamily::Windows,
            _ => OsFamily::Other,
        }
    }

    /// True only on macOS running a 64-bit ARM CPU.
    pub fn is_macos_arm(&self) -> bool {
        self.family() == OsFamily::MacOs
            && ARM64_IDENTIFIERS.contains(&self.arch.to_ascii_lowercase().as_str())
    }
}

impl Default for PlatformInfo {
    fn default() -> Self {
        Self::detect()
    }
}

impl std::fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.os, self.arch)
    }
}
