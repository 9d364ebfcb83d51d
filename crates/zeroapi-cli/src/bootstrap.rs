//! CLI bootstrap: the composition root.
//!
//! Merges `.env`/environment configuration with command-line flags and
//! builds the resolver every handler shares.

use anyhow::Result;
use tracing::debug;
use zeroapi_core::ParserConfig;
use zeroapi_runtime::{ApiParser, ExecutableResolver, Executor};

use crate::parser::Cli;

/// Fully composed context for CLI commands.
#[derive(Debug)]
pub struct CliContext {
    pub config: ParserConfig,
    pub resolver: ExecutableResolver,
}

impl CliContext {
    pub fn new(config: ParserConfig) -> Result<Self> {
        let resolver = ExecutableResolver::from_config(&config)?;
        debug!(layout = ?resolver.layout(), "Composed CLI context");
        Ok(Self { config, resolver })
    }

    /// Resolve the executable (explicit or auto-detected) and wrap it in a parser.
    pub fn parser(&self) -> Result<ApiParser> {
        let executor = Executor::with_resolver(&self.resolver, self.config.executable.as_deref())?;
        debug!(
            executable = %executor.executable_path().display(),
            auto_detected = executor.is_auto_detected(),
            "Resolved API parser"
        );
        Ok(ApiParser::new(executor))
    }
}

/// Build the context from the environment, letting flags take precedence.
pub fn bootstrap(cli: &Cli) -> Result<CliContext> {
    let mut config = ParserConfig::from_env();
    if let Some(path) = &cli.executable {
        config.executable = Some(path.clone());
    }
    CliContext::new(config)
}
