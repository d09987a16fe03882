//! Error types for promptform.
//!
//! The scanning and parsing core never fails; these errors come from the
//! outer layers (config, templates, files, command-line arguments).

use crate::exit_codes;
use crate::render::TemplateError;
use thiserror::Error;

/// Main error type for promptform operations.
#[derive(Error, Debug)]
pub enum PromptFormError {
    /// User provided invalid arguments or a malformed submission.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read, parsed or validated.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// A form template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Reading or writing a file or stdio stream failed.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl PromptFormError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptFormError::UserError(_) => exit_codes::USER_ERROR,
            PromptFormError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            PromptFormError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            PromptFormError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for promptform operations.
pub type Result<T> = std::result::Result<T, PromptFormError>;
