//! Error types for the address book assistant.
//!
//! Field validation failures live in [`crate::domain::ValidationError`]; this
//! module defines the errors of the layers built on top of the core.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while running an assistant command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command was given fewer arguments than it needs
    #[error("Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failed to render the book as JSON
    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
