//! Executable resolution.
//!
//! An explicit path is validated and used as is. Otherwise the resolver
//! probes, in order, the macOS arm64 prebuilt binary, the previously compiled
//! binary, and finally an on-demand `go build`. When nothing works it fails
//! with either the build output or platform-specific install guidance.

mod diagnostics;
mod probe;
mod validate;

use std::path::Path;

use tracing::{debug, warn};
use zeroapi_core::{
    ExecutableDescriptor, ExecutableProbe, ParserConfig, ParserError, ParserLayout, ParserResult,
    PlatformInfo, ToolchainPort,
};

use crate::toolchain::{GoToolchain, install_guidance, is_compatible};

pub use diagnostics::{
    AttemptOutcome, ProbeSource, ResolutionAttempt, ResolveDebugInfo, SystemInfo,
};
pub use validate::{FsExecutableProbe, is_executable_file, validate_executable};

use probe::ProbeContext;

/// Picks the parser executable for an [`crate::Executor`].
///
/// Platform, filesystem probe and toolchain are injectable so tests can
/// simulate any host.
pub struct ExecutableResolver {
    layout: ParserLayout,
    platform: PlatformInfo,
    probe: Box<dyn ExecutableProbe>,
    toolchain: Box<dyn ToolchainPort>,
}

impl std::fmt::Debug for ExecutableResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutableResolver")
            .field("layout", &self.layout)
            .field("platform", &self.platform)
            .field("toolchain", &self.toolchain.name())
            .finish_non_exhaustive()
    }
}

impl ExecutableResolver {
    /// Resolver for the running host, using the real filesystem and `go` from `PATH`.
    pub fn new(layout: ParserLayout) -> Self {
        Self {
            layout,
            platform: PlatformInfo::detect(),
            probe: Box::new(FsExecutableProbe),
            toolchain: Box::new(GoToolchain::default()),
        }
    }

    /// Resolver honoring the layout and toolchain overrides in `config`.
    pub fn from_config(config: &ParserConfig) -> ParserResult<Self> {
        let layout = config.layout()?;
        Ok(Self::new(layout).with_toolchain(GoToolchain::new(config.go_bin())))
    }

    #[must_use]
    pub fn with_platform(mut self, platform: PlatformInfo) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub fn with_probe(mut self, probe: impl ExecutableProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    #[must_use]
    pub fn with_toolchain(mut self, toolchain: impl ToolchainPort + 'static) -> Self {
        self.toolchain = Box::new(toolchain);
        self
    }

    pub const fn layout(&self) -> &ParserLayout {
        &self.layout
    }

    pub const fn platform(&self) -> &PlatformInfo {
        &self.platform
    }

    pub fn toolchain(&self) -> &dyn ToolchainPort {
        self.toolchain.as_ref()
    }

    /// Validate `explicit` if given, otherwise auto-detect.
    pub fn resolve(&self, explicit: Option<&Path>) -> ParserResult<ExecutableDescriptor> {
        match explicit {
            Some(path) => self.resolve_explicit(path),
            None => self.auto_detect(),
        }
    }

    /// Accept a caller-supplied path if it exists and is executable.
    pub fn resolve_explicit(&self, path: &Path) -> ParserResult<ExecutableDescriptor> {
        validate::check_with(self.probe.as_ref(), path)?;
        debug!(path = %path.display(), "Using explicit API parser");
        Ok(ExecutableDescriptor::explicit(path))
    }

    /// Probe for a usable executable, building one if a Go toolchain is present.
    pub fn auto_detect(&self) -> ParserResult<ExecutableDescriptor> {
        self.run_probes().0
    }

    /// Resolve like [`Self::resolve`], keeping every probe step.
    pub fn resolve_debug(&self, explicit: Option<&Path>) -> ResolveDebugInfo {
        let (result, attempts) = match explicit {
            Some(path) => {
                let result = self.resolve_explicit(path);
                let outcome = match &result {
                    Ok(_) => AttemptOutcome::Ok,
                    Err(ParserError::NotExecutable { .. }) => AttemptOutcome::NotExecutable,
                    Err(_) => AttemptOutcome::Missing,
                };
                let attempt = ResolutionAttempt {
                    candidate: path.to_path_buf(),
                    source: ProbeSource::Explicit,
                    outcome,
                    detail: None,
                };
                (result, vec![attempt])
            }
            None => self.run_probes(),
        };

        let (resolved_path, auto_detected, error) = match result {
            Ok(descriptor) => (
                Some(descriptor.path().to_path_buf()),
                descriptor.is_auto_detected(),
                None,
            ),
            Err(e) => (None, false, Some(e.to_string())),
        };

        ResolveDebugInfo {
            platform: self.platform.clone(),
            resolved_path,
            auto_detected,
            error,
            attempts,
        }
    }

    /// Platform and Go toolchain status.
    pub fn system_info(&self) -> SystemInfo {
        let go_version = self.toolchain.version();

        SystemInfo {
            os: self.platform.os.clone(),
            arch: self.platform.arch.clone(),
            zeroapi_version: env!("CARGO_PKG_VERSION"),
            go_available: go_version.is_some(),
            go_compatible: go_version.as_deref().is_some_and(is_compatible),
            go_version,
        }
    }

    fn run_probes(&self) -> (ParserResult<ExecutableDescriptor>, Vec<ResolutionAttempt>) {
        let mut ctx = ProbeContext::new(
            &self.layout,
            &self.platform,
            self.probe.as_ref(),
            self.toolchain.as_ref(),
        );

        let result = match ctx.run() {
            Some((source, path)) => {
                debug!(path = %path.display(), ?source, "Auto-detected API parser");
                Ok(ExecutableDescriptor::auto_detected(path))
            }
            None => Err(match ctx.compile_failure.take() {
                Some(attempt) => {
                    warn!(entry = %attempt.source_path.display(), "API parser build failed");
                    ParserError::CompileFailed {
                        entry: attempt.source_path,
                        output: attempt.output,
                    }
                }
                None => {
                    warn!(platform = %self.platform, "No API parser and no Go toolchain");
                    ParserError::ToolchainUnavailable {
                        guidance: install_guidance(&self.platform),
                    }
                }
            }),
        };

        (result, ctx.attempts)
    }
}
