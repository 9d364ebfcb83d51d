//! `go` command adapter implementing [`ToolchainPort`].

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};
use zeroapi_core::config::DEFAULT_GO_BIN;
use zeroapi_core::{CompileAttempt, ToolchainPort};

use crate::process::{configure_command_no_window, run_merged};
use crate::resolver::is_executable_file;

/// The Go toolchain found on `PATH` (or at an explicit location).
///
/// Nothing is cached: every [`ToolchainPort::version`] call looks the program
/// up and runs `go version` again.
#[derive(Debug, Clone)]
pub struct GoToolchain {
    program: OsString,
}

impl GoToolchain {
    /// Use `program` (a bare name searched on `PATH`, or a path) as the `go` command.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn locate(&self) -> Option<PathBuf> {
        match which::which(&self.program) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(program = ?self.program, error = %e, "Go toolchain not found");
                None
            }
        }
    }

    fn query_version(program: &Path) -> Option<String> {
        let mut cmd = Command::new(program);
        cmd.arg("version");
        configure_command_no_window(&mut cmd);

        let output = cmd.output().ok()?;
        if !output.status.success() {
            return None;
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!version.is_empty()).then_some(version)
    }
}

/// Remove whatever a failed build left at `target`.
fn discard_partial_output(target: &Path) {
    if !target.exists() {
        return;
    }
    if let Err(e) = fs::remove_file(target) {
        warn!(path = %target.display(), error = %e, "Failed to remove partial build output");
    }
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self::new(DEFAULT_GO_BIN)
    }
}

impl ToolchainPort for GoToolchain {
    fn name(&self) -> &'static str {
        "go"
    }

    fn version(&self) -> Option<String> {
        let program = self.locate()?;
        let version = Self::query_version(&program);
        debug!(program = %program.display(), ?version, "Probed Go toolchain");
        version
    }

    fn compile(&self, source: &Path, output: &Path) -> CompileAttempt {
        let failed = |message: String| {
            CompileAttempt::failed(source.to_path_buf(), output.to_path_buf(), message)
        };

        if !source.is_file() {
            return failed(format!("Go source entry point not found: {}", source.display()));
        }
        let Some(program) = self.locate() else {
            return failed(format!("Go toolchain not found: {:?}", self.program));
        };
        let (Some(source_dir), Some(file_name)) = (source.parent(), source.file_name()) else {
            return failed(format!("Invalid Go source path: {}", source.display()));
        };

        // `go build` runs inside the source directory, so the target must not be relative.
        let target = match std::path::absolute(output) {
            Ok(path) => path,
            Err(e) => return failed(format!("Invalid output path {}: {e}", output.display())),
        };
        if let Some(parent) = target.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            return failed(format!("Failed to create {}: {e}", parent.display()));
        }

        let mut cmd = Command::new(&program);
        cmd.current_dir(source_dir)
            .args(["build", "-mod=readonly", "-o"])
            .arg(&target)
            .arg(file_name);

        info!(source = %source.display(), output = %target.display(), "Compiling API parser");

        let captured = match run_merged(cmd) {
            Ok(captured) => captured,
            Err(e) => return failed(format!("Failed to run {}: {e}", program.display())),
        };

        if !captured.success() {
            warn!(status = %captured.status, "go build failed");
            discard_partial_output(&target);
            return failed(captured.text);
        }

        if !is_executable_file(&target) {
            discard_partial_output(&target);
            return failed(format!(
                "go build exited successfully but produced no executable at {}",
                target.display()
            ));
        }

        CompileAttempt::succeeded(source.to_path_buf(), target, captured.text)
    }
}
