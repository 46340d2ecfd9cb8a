use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code for an empty or invalid required argument.
pub const EXIT_INVALID_ARGUMENT: i32 = 1;

/// Exit code for a missing required configuration variable.
pub const EXIT_MISSING_CONFIGURATION: i32 = 2;

/// Library-wide error type for cfsetup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required argument was empty or not given.
    #[error("argument '{name}' must not be empty")]
    MissingArgument { name: String },

    /// An argument was given but cannot be used.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// A required environment variable is unset or empty.
    #[error("environment variable {variable} must not be empty")]
    MissingConfiguration { variable: String },

    /// An external command exited unsuccessfully or could not be started.
    #[error("'{command}' failed: {details}")]
    CommandFailed { command: String, code: Option<i32>, details: String },

    /// libgit2 failed while inspecting a repository.
    #[error("git repository error: {0}")]
    Repository(#[from] git2::Error),

    /// The activation script could not be made relocatable.
    #[error("cannot patch activation script {}: {reason}", path.display())]
    ActivationPatch { path: PathBuf, reason: String },

    /// A requirements manifest line is malformed.
    #[error("invalid requirement on line {line}: {reason}")]
    InvalidRequirement { line: usize, reason: String },
}

impl AppError {
    pub fn missing_argument<S: Into<String>>(name: S) -> Self {
        AppError::MissingArgument { name: name.into() }
    }

    pub fn missing_configuration<S: Into<String>>(variable: S) -> Self {
        AppError::MissingConfiguration { variable: variable.into() }
    }

    /// Process exit code reported by the command-line tools for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::MissingArgument { .. }
            | AppError::InvalidArgument { .. }
            | AppError::InvalidRequirement { .. } => EXIT_INVALID_ARGUMENT,
            AppError::MissingConfiguration { .. } => EXIT_MISSING_CONFIGURATION,
            AppError::CommandFailed { code, .. } => match code {
                Some(code) if *code != 0 => *code,
                _ => 1,
            },
            AppError::Io(_) | AppError::Repository(_) | AppError::ActivationPatch { .. } => 1,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::MissingArgument { .. }
            | AppError::InvalidArgument { .. }
            | AppError::InvalidRequirement { .. } => io::ErrorKind::InvalidInput,
            AppError::MissingConfiguration { .. } => io::ErrorKind::NotFound,
            AppError::ActivationPatch { .. } => io::ErrorKind::InvalidData,
            AppError::CommandFailed { .. } | AppError::Repository(_) => io::ErrorKind::Other,
        }
    }
}
