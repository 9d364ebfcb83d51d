//! Auto-detection probes, tried in [`PROBE_ORDER`].

use std::path::PathBuf;

use tracing::{debug, info};
use zeroapi_core::{CompileAttempt, ExecutableProbe, ParserLayout, PlatformInfo, ToolchainPort};

use super::diagnostics::{AttemptOutcome, ProbeSource, ResolutionAttempt};

type ProbeFn = fn(&mut ProbeContext<'_>) -> Option<PathBuf>;

/// First probe returning a path wins.
pub(super) const PROBE_ORDER: [(ProbeSource, ProbeFn); 3] = [
    (ProbeSource::PrebuiltPlatform, probe_prebuilt),
    (ProbeSource::Compiled, probe_compiled),
    (ProbeSource::OnDemandBuild, probe_build),
];

/// Inputs and accumulated findings of a single auto-detection run.
pub(super) struct ProbeContext<'a> {
    pub layout: &'a ParserLayout,
    pub platform: &'a PlatformInfo,
    pub fs: &'a dyn ExecutableProbe,
    pub toolchain: &'a dyn ToolchainPort,
    pub attempts: Vec<ResolutionAttempt>,
    /// Set when a toolchain was present but the build did not succeed.
    pub compile_failure: Option<CompileAttempt>,
}

impl<'a> ProbeContext<'a> {
    pub fn new(
        layout: &'a ParserLayout,
        platform: &'a PlatformInfo,
        fs: &'a dyn ExecutableProbe,
        toolchain: &'a dyn ToolchainPort,
    ) -> Self {
        Self {
            layout,
            platform,
            fs,
            toolchain,
            attempts: Vec::new(),
            compile_failure: None,
        }
    }

    /// Run the probes in order and return the first hit.
    pub fn run(&mut self) -> Option<(ProbeSource, PathBuf)> {
        PROBE_ORDER
            .iter()
            .find_map(|(source, probe)| probe(self).map(|path| (*source, path)))
    }

    fn record(
        &mut self,
        candidate: PathBuf,
        source: ProbeSource,
        outcome: AttemptOutcome,
        detail: Option<String>,
    ) {
        debug!(candidate = %candidate.display(), ?source, ?outcome, "Probed parser candidate");
        self.attempts.push(ResolutionAttempt {
            candidate,
            source,
            outcome,
            detail,
        });
    }

    fn check_candidate(&mut self, candidate: PathBuf, source: ProbeSource) -> Option<PathBuf> {
        if !self.fs.exists(&candidate) {
            self.record(candidate, source, AttemptOutcome::Missing, None);
            None
        } else if !self.fs.is_executable(&candidate) {
            self.record(candidate, source, AttemptOutcome::NotExecutable, None);
            None
        } else {
            self.record(candidate.clone(), source, AttemptOutcome::Ok, None);
            Some(candidate)
        }
    }
}

fn probe_prebuilt(ctx: &mut ProbeContext<'_>) -> Option<PathBuf> {
    let candidate = ctx.layout.prebuilt_macos_arm64.clone();

    if !ctx.platform.is_macos_arm() {
        let detail = format!("not applicable on {}", ctx.platform);
        ctx.record(
            candidate,
            ProbeSource::PrebuiltPlatform,
            AttemptOutcome::Skipped,
            Some(detail),
        );
        return None;
    }

    ctx.check_candidate(candidate, ProbeSource::PrebuiltPlatform)
}

fn probe_compiled(ctx: &mut ProbeContext<'_>) -> Option<PathBuf> {
    let candidate = ctx.layout.compiled_binary.clone();
    ctx.check_candidate(candidate, ProbeSource::Compiled)
}

fn probe_build(ctx: &mut ProbeContext<'_>) -> Option<PathBuf> {
    let output = ctx.layout.compiled_binary.clone();
    let source = ctx.layout.go_source.clone();

    let Some(version) = ctx.toolchain.version() else {
        let detail = format!("`{} version` failed or printed nothing", ctx.toolchain.name());
        ctx.record(
            output,
            ProbeSource::OnDemandBuild,
            AttemptOutcome::ToolchainMissing,
            Some(detail),
        );
        return None;
    };

    if !ctx.fs.exists(&source) {
        let message = format!(
            "Go source entry point not found: {}. The package must ship go/main.go to build the parser.",
            source.display()
        );
        ctx.record(
            output.clone(),
            ProbeSource::OnDemandBuild,
            AttemptOutcome::CompileFailed,
            Some(message.clone()),
        );
        ctx.compile_failure = Some(CompileAttempt::failed(source, output, message));
        return None;
    }

    info!(%version, source = %source.display(), "Building API parser on demand");
    let attempt = ctx.toolchain.compile(&source, &output);

    if attempt.succeeded {
        let built = attempt.output_path;
        ctx.record(
            built.clone(),
            ProbeSource::OnDemandBuild,
            AttemptOutcome::Ok,
            Some(version),
        );
        Some(built)
    } else {
        let detail = attempt.output.lines().next().map(str::to_string);
        ctx.record(
            output,
            ProbeSource::OnDemandBuild,
            AttemptOutcome::CompileFailed,
            detail,
        );
        ctx.compile_failure = Some(attempt);
        None
    }
}
