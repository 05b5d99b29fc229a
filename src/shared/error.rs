use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a missing character from
/// bad input and from local failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - character found and rendered
    Success = 0,
    /// The character could not be loaded (missing character or upstream failure)
    CharacterNotFound = 1,
    /// Invalid command-line arguments or search input
    InvalidArguments = 2,
    /// Application error (configuration, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error surfaced by a lookup run to the exit code the CLI reports.
    ///
    /// Errors that are not a `LookupError` are local failures.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LookupError>() {
            Some(e) if e.is_lookup_failure() => ExitCode::CharacterNotFound,
            Some(LookupError::InvalidInput { .. }) => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CharacterNotFound => write!(f, "Character Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for character lookup.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Values travel inside `anyhow::Error` and are recovered with `downcast_ref`.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Character not found: {character_name} ({world_name})")]
    NotFound {
        character_name: String,
        world_name: String,
    },

    #[error("Upstream request failed: {endpoint}\nDetails: {details}")]
    UpstreamError { endpoint: String, details: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}\n\n💡 Hint: {hint}")]
    Config { message: String, hint: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl LookupError {
    pub fn upstream(endpoint: &str, details: impl Into<String>) -> Self {
        LookupError::UpstreamError {
            endpoint: endpoint.to_string(),
            details: details.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        LookupError::InvalidInput {
            message: message.into(),
        }
    }

    /// True for the failures a lookup run reports to the user as
    /// "character not found".
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            LookupError::NotFound { .. } | LookupError::UpstreamError { .. }
        )
    }
}
