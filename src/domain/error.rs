use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for copydeck operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Requested template name is not registered.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Prompt template could not be rendered.
    #[error("Prompt rendering failed: {0}")]
    PromptRender(#[from] minijinja::Error),

    /// Rendered output could not be serialized.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// LLM API transport could not be set up.
    #[error("LLM API error: {message}")]
    LlmApiError { message: String, status: Option<u16> },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_)
            | AppError::PromptRender(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound(_) | AppError::InputNotFound(_) => io::ErrorKind::NotFound,
            AppError::Serialization(_) | AppError::LlmApiError { .. } => io::ErrorKind::Other,
        }
    }
}
