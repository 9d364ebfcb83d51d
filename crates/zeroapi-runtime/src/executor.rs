//! Runs the parser executable against `.api` files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};
use zeroapi_core::{
    ExecutableDescriptor, InvocationOutcome, ParserConfig, ParserError, ParserResult,
};

use crate::process::run_merged;
use crate::resolver::{ExecutableResolver, validate_executable};

/// Owns the resolved parser executable and invokes it.
///
/// Each invocation passes the input path as the only argument (no shell is
/// involved) and captures stdout and stderr as one stream. Calls block until
/// the child exits.
#[derive(Debug, Clone)]
pub struct Executor {
    descriptor: ExecutableDescriptor,
}

impl Executor {
    /// Use `executable` if given, otherwise auto-detect from the default package layout.
    pub fn new(executable: Option<&Path>) -> ParserResult<Self> {
        let resolver = ExecutableResolver::from_config(&ParserConfig::default())?;
        Self::with_resolver(&resolver, executable)
    }

    /// Resolve according to `config` (explicit path, layout and toolchain overrides).
    pub fn from_config(config: &ParserConfig) -> ParserResult<Self> {
        let resolver = ExecutableResolver::from_config(config)?;
        Self::with_resolver(&resolver, config.executable.as_deref())
    }

    /// Resolve with a preconfigured resolver.
    pub fn with_resolver(
        resolver: &ExecutableResolver,
        executable: Option<&Path>,
    ) -> ParserResult<Self> {
        let descriptor = resolver.resolve(executable)?;
        Ok(Self::from_descriptor(descriptor))
    }

    /// Wrap an already resolved descriptor without re-validating it.
    pub const fn from_descriptor(descriptor: ExecutableDescriptor) -> Self {
        Self { descriptor }
    }

    /// Run the parser on one file and return its merged output verbatim.
    pub fn execute(&self, input: impl AsRef<Path>) -> ParserResult<String> {
        let input = input.as_ref();
        if !input.exists() {
            return Err(ParserError::InputNotFound {
                path: input.to_path_buf(),
            });
        }

        // A bare file name would otherwise be looked up on PATH.
        let program = std::path::absolute(self.descriptor.path())?;

        let mut cmd = Command::new(&program);
        cmd.arg(input);

        debug!(program = %program.display(), input = %input.display(), "Running API parser");

        let captured = run_merged(cmd).map_err(|source| ParserError::Spawn {
            program: program.clone(),
            source,
        })?;

        if !captured.success() {
            warn!(input = %input.display(), status = %captured.status, "API parser failed");
            return Err(ParserError::ExecutionFailed {
                path: input.to_path_buf(),
                output: captured.text.trim_end().to_string(),
            });
        }

        Ok(captured.text)
    }

    /// Run the parser on each file, keyed by input path.
    ///
    /// One failure never aborts the batch. A path listed twice is run twice
    /// and the later outcome is kept.
    pub fn execute_multiple<I, P>(&self, inputs: I) -> HashMap<PathBuf, InvocationOutcome>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.execute_each(inputs).into_iter().collect()
    }

    /// Like [`Self::execute_multiple`] but keeps every occurrence, in input order.
    pub fn execute_each<I, P>(&self, inputs: I) -> Vec<(PathBuf, InvocationOutcome)>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        inputs
            .into_iter()
            .map(|input| {
                let input = input.as_ref();
                (input.to_path_buf(), self.execute(input).into())
            })
            .collect()
    }

    /// Switch to another executable. Validated first; clears the auto-detected flag.
    pub fn set_executable_path(&mut self, path: impl AsRef<Path>) -> ParserResult<()> {
        let path = path.as_ref();
        validate_executable(path)?;
        self.descriptor.set_path(path);
        Ok(())
    }

    pub fn executable_path(&self) -> &Path {
        self.descriptor.path()
    }

    pub const fn is_auto_detected(&self) -> bool {
        self.descriptor.is_auto_detected()
    }

    pub const fn descriptor(&self) -> &ExecutableDescriptor {
        &self.descriptor
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::{TempDir, tempdir};

    fn script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_execute_returns_output() {
        let dir = tempdir().unwrap();
        let exe = script(&dir, "parser", r#"echo '{"info":{}}'"#);
        let input = dir.path().join("a.api");
        fs::write(&input, "syntax = \"v1\"").unwrap();

        let executor = Executor::from_descriptor(ExecutableDescriptor::explicit(&exe));

        assert_eq!(executor.execute(&input).unwrap(), "{\"info\":{}}\n");
    }

    #[test]
    fn test_missing_input_never_spawns() {
        let dir = tempdir().unwrap();
        let marker = dir.path().join("spawned");
        let exe = script(&dir, "parser", &format!("touch '{}'", marker.display()));
        let executor = Executor::from_descriptor(ExecutableDescriptor::explicit(&exe));

        let err = executor.execute(dir.path().join("missing.api")).unwrap_err();

        assert!(matches!(err, ParserError::InputNotFound { .. }));
        assert!(!marker.exists());
    }

    #[test]
    fn test_failure_embeds_merged_output() {
        let dir = tempdir().unwrap();
        let exe = script(&dir, "parser", "echo 'line 3: unexpected token' >&2\nexit 1");
        let input = dir.path().join("bad.api");
        fs::write(&input, "").unwrap();
        let executor = Executor::from_descriptor(ExecutableDescriptor::explicit(&exe));

        let err = executor.execute(&input).unwrap_err();

        assert!(matches!(err, ParserError::ExecutionFailed { .. }));
        assert!(err.to_string().contains("line 3: unexpected token"));
    }

    #[test]
    fn test_set_executable_path() {
        let dir = tempdir().unwrap();
        let first = script(&dir, "first", "true");
        let second = script(&dir, "second", "true");

        let mut executor = Executor::from_descriptor(ExecutableDescriptor::auto_detected(&first));
        assert!(executor.is_auto_detected());

        executor.set_executable_path(&second).unwrap();
        assert_eq!(executor.executable_path(), second);
        assert!(!executor.is_auto_detected());

        let err = executor
            .set_executable_path(dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, ParserError::MissingExecutable { .. }));
        assert_eq!(executor.executable_path(), second);
    }
}
