//! CLI error taxonomy.

use framecode::TimecodeError;
use thiserror::Error;

/// Exit status for every failure.
pub const EXIT_FAILURE: i32 = 1;

/// Errors surfaced to the user by the `framecode` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of arguments or an unknown flag.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// An argument that is not a number.
    #[error("Invalid {argument} '{value}': {reason}")]
    Parse {
        /// Human-readable argument name.
        argument: &'static str,
        /// The text that failed to parse.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// The conversion itself failed.
    #[error(transparent)]
    Timecode(#[from] TimecodeError),
}

impl CliError {
    /// Create a parse error for `argument`.
    pub fn parse(argument: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            argument,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Stable tag used in JSON error output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::Parse { .. } => "parse_error",
            Self::Timecode(err) => err.kind(),
        }
    }

    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}
