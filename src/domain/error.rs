use std::io;

use thiserror::Error;

/// Library-wide error type for framecraft operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration problem (file contents or derived paths).
    #[error("{0}")]
    Configuration(String),

    /// User input failed validation.
    #[error("{0}")]
    Validation(String),

    /// Required environment variable is not set.
    #[error("Environment variable {0} not set")]
    EnvironmentVariableMissing(String),

    /// Output mode string is not recognized.
    #[error("Invalid output mode '{0}': must be one of general, midjourney, json")]
    InvalidOutputMode(String),

    /// No composable prompt: the required subject field is empty.
    #[error("The {0} form has no subject to work with")]
    EmptySubject(String),

    /// Polish is not available for structured JSON output.
    #[error("Polish does not support the json output mode")]
    PolishUnsupportedMode,

    /// Preset not found for the given id.
    #[error("Preset '{0}' not found")]
    PresetNotFound(String),

    /// Gemini API call failed.
    #[error("Gemini API error: {message}")]
    EnhancerApi { message: String, status: Option<u16> },

    /// System instruction template failed to load or render.
    #[error("Instruction template error: {0}")]
    InstructionTemplate(String),

    /// Clipboard write failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl AppError {
    pub(crate) fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
