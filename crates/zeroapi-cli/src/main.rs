//! CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use zeroapi_cli::{Cli, CliError, Commands, bootstrap, handlers};

/// Log to stderr so stdout stays pure JSON. `--verbose` forces debug level;
/// otherwise `RUST_LOG` applies, defaulting to `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = bootstrap(&cli)?;

    match cli.command {
        Commands::Parse {
            file,
            pretty,
            section,
        } => handlers::parse::execute(&ctx, &file, pretty, section),
        Commands::ParseMany { files, pretty } => handlers::batch::execute(&ctx, &files, pretty),
        Commands::SystemInfo { json } => handlers::system::execute(&ctx, json),
        Commands::Paths => handlers::paths::execute(&ctx),
        Commands::Resolve { json } => handlers::resolve::execute(&ctx, json),
    }
}

fn main() -> ExitCode {
    // Load .env before parsing so clap's env fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(CliError::exit_code_for(&err))
        }
    }
}
