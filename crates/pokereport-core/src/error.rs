//! Error types for pokereport.

use std::path::{Path, PathBuf};

/// Errors that can occur while building a creature report.
///
/// Remote and filesystem failures are wrapped with their original cause kept
/// as the error source; nothing here is retried.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The lookup service does not know the requested creature.
    #[error("Creature not found: {name}")]
    CreatureNotFound {
        /// Name that was looked up
        name: String,
    },

    /// A remote service answered with a non-success status.
    #[error("{service} API error (HTTP {status}): {message}")]
    Api {
        /// Which service answered (e.g. "pokeapi", "translate")
        service: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Transport-level HTTP failure (connect, TLS, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The translation service answered without any translation.
    #[error("Translation response contained no translations")]
    EmptyTranslation,

    /// The HTML-to-PDF converter failed.
    #[error("Render error: {message}")]
    Render {
        /// What went wrong (exit status, stderr)
        message: String,
        /// Source error if available
        #[source]
        source: Option<std::io::Error>,
    },

    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file.
    #[error("I/O error on {path}: {source}")]
    IoWithPath {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Input validation error.
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },
}

/// Convenience `Result` type alias for pokereport operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an I/O error tagged with the file it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a render error without an underlying I/O cause.
    pub fn render<S: Into<String>>(message: S) -> Self {
        Error::Render {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a render error wrapping the I/O failure that caused it.
    pub fn render_with_source<S: Into<String>>(message: S, source: std::io::Error) -> Self {
        Error::Render {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Returns `true` when the error came from a remote service rather than
    /// from local I/O or configuration.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Error::CreatureNotFound { .. }
                | Error::Api { .. }
                | Error::Http(_)
                | Error::EmptyTranslation
        )
    }
}
