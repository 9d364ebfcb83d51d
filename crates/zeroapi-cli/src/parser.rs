//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;
use zeroapi_core::config::ENV_PARSER_PATH;

use crate::commands::Commands;

/// Command-line interface for the go-zero `.api` parser façade.
#[derive(Parser, Debug)]
#[command(name = "zeroapi")]
#[command(about = "Parse go-zero .api files into JSON")]
#[command(version)]
pub struct Cli {
    /// Use this parser executable instead of auto-detecting one
    #[arg(long, global = true, env = ENV_PARSER_PATH, value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Section;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "zeroapi",
            "paths",
            "--verbose",
            "--executable",
            "/opt/api-parser",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.executable, Some(PathBuf::from("/opt/api-parser")));
        assert!(matches!(cli.command, Commands::Paths));
    }

    #[test]
    fn test_parse_command_args() {
        let cli = Cli::parse_from(["zeroapi", "parse", "user.api", "--pretty", "--section", "types"]);
        match cli.command {
            Commands::Parse {
                file,
                pretty,
                section,
            } => {
                assert_eq!(file, PathBuf::from("user.api"));
                assert!(pretty);
                assert_eq!(section, Some(Section::Types));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_many_requires_files() {
        assert!(Cli::try_parse_from(["zeroapi", "parse-many"]).is_err());

        let cli = Cli::try_parse_from(["zeroapi", "parse-many", "a.api", "b.api", "a.api"]).unwrap();
        match cli.command {
            Commands::ParseMany { files, .. } => assert_eq!(files.len(), 3),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
