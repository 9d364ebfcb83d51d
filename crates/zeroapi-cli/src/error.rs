//! CLI-specific error types and exit codes.

use thiserror::Error;
use zeroapi_core::ParserError;

#[derive(Debug, Error)]
pub enum CliError {
    /// An input file is missing.
    #[error("{0}")]
    Input(String),

    /// The parser rejected the input or printed something that is not JSON.
    #[error("{0}")]
    Parse(String),

    /// No usable parser executable.
    #[error("{0}")]
    Resolution(String),

    /// The parser could not be launched.
    #[error("Process error: {0}")]
    Process(String),

    #[error("IO error: {0}")]
    Io(String),

    /// Some files in a batch failed.
    #[error("{failed} of {total} files failed to parse")]
    Batch { failed: usize, total: usize },
}

impl CliError {
    /// Map error to an exit code (see sysexits.h).
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Input(_) => 66,      // EX_NOINPUT
            Self::Parse(_) => 65,      // EX_DATAERR
            Self::Resolution(_) => 69, // EX_UNAVAILABLE
            Self::Process(_) => 71,    // EX_OSERR
            Self::Io(_) => 74,         // EX_IOERR
            Self::Batch { .. } => 1,
        }
    }

    /// Exit code for any error reaching `main`.
    pub fn exit_code_for(err: &anyhow::Error) -> u8 {
        if let Some(cli) = err.downcast_ref::<Self>() {
            return cli.exit_code();
        }
        err.downcast_ref::<ParserError>()
            .map_or(1, |parser| Self::from_parser_ref(parser).exit_code())
    }

    fn from_parser_ref(err: &ParserError) -> Self {
        let message = err.to_string();
        match err {
            ParserError::InputNotFound { .. } => Self::Input(message),
            ParserError::ExecutionFailed { .. } | ParserError::DecodeFailed { .. } => {
                Self::Parse(message)
            }
            ParserError::Spawn { .. } => Self::Process(message),
            ParserError::Io(_) | ParserError::Path(_) => Self::Io(message),
            ParserError::MissingExecutable { .. }
            | ParserError::NotExecutable { .. }
            | ParserError::ToolchainUnavailable { .. }
            | ParserError::CompileFailed { .. } => Self::Resolution(message),
        }
    }
}

impl From<ParserError> for CliError {
    fn from(err: ParserError) -> Self {
        Self::from_parser_ref(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parser_error_mapping() {
        let err: CliError = ParserError::InputNotFound {
            path: PathBuf::from("a.api"),
        }
        .into();
        assert_eq!(err.exit_code(), 66);
        assert_eq!(err.to_string(), "API file not found: a.api");

        let err: CliError = ParserError::ToolchainUnavailable {
            guidance: "install go".into(),
        }
        .into();
        assert_eq!(err.exit_code(), 69);
    }

    #[test]
    fn test_exit_code_through_anyhow() {
        let err = anyhow::Error::new(ParserError::decode_failed("eof", ""));
        assert_eq!(CliError::exit_code_for(&err), 65);

        let err = anyhow::Error::new(CliError::Batch {
            failed: 1,
            total: 3,
        });
        assert_eq!(CliError::exit_code_for(&err), 1);

        assert_eq!(CliError::exit_code_for(&anyhow::anyhow!("other")), 1);
    }
}
