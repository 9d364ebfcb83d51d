//! Structured resolution diagnostics.
//!
//! Every candidate the resolver looks at is recorded as a
//! [`ResolutionAttempt`], so `zeroapi resolve` can explain why a path was
//! or was not chosen.

use std::path::PathBuf;

use serde::Serialize;
use zeroapi_core::PlatformInfo;

/// Where a candidate path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeSource {
    Explicit,
    PrebuiltPlatform,
    Compiled,
    OnDemandBuild,
}

/// What happened when a candidate was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    Ok,
    Skipped,
    Missing,
    NotExecutable,
    ToolchainMissing,
    CompileFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionAttempt {
    pub candidate: PathBuf,
    pub source: ProbeSource,
    pub outcome: AttemptOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Full trace of one resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveDebugInfo {
    pub platform: PlatformInfo,
    pub resolved_path: Option<PathBuf>,
    pub auto_detected: bool,
    pub error: Option<String>,
    pub attempts: Vec<ResolutionAttempt>,
}

/// Environment snapshot: platform plus Go toolchain status.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub zeroapi_version: &'static str,
    pub go_available: bool,
    pub go_version: Option<String>,
    /// At least the minimum supported Go release.
    pub go_compatible: bool,
}
