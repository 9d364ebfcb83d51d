//! Subcommands of the `zeroapi` binary.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse one .api file and print the result as JSON
    Parse {
        /// Path to the .api file
        file: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Print only one section of the document
        #[arg(long, value_enum)]
        section: Option<Section>,
    },

    /// Parse several .api files; one failure does not stop the others
    ParseMany {
        /// Paths to the .api files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show platform and Go toolchain status
    SystemInfo {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show parser binary locations and whether they exist
    Paths,

    /// Explain how the parser executable is resolved
    Resolve {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Document section selectable with `parse --section`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Info,
    Syntax,
    Imports,
    Types,
    Service,
    Groups,
}
