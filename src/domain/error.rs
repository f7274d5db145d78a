//! Domain error types

use thiserror::Error;

/// Error when an unknown content type name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid content type: \"{input}\". Valid types are: blog, seo, faq, social, newsletter, quotes")]
pub struct InvalidContentTypeError {
    pub input: String,
}

/// Error from the pre-submission validation gate.
/// Reported immediately; no network request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select an audio file")]
    NoFileSelected,

    #[error("File size exceeds the 20MB limit")]
    FileTooLarge,

    #[error("Only audio files (.mp3, .wav, .m4a, .ogg) are supported")]
    UnsupportedType,

    #[error("Please select at least one content type")]
    NoContentTypeSelected,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
