//! Centralized error types for mailbits.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the file-backed helpers.
///
/// Address list parsing does not use this type: a candidate that fails
/// to parse is reported as an [`AddressError`] value next to the
/// successful results.
#[derive(Error, Debug)]
pub enum MailbitsError {
    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The specified file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

/// Convenience alias for `Result<T, MailbitsError>`.
pub type Result<T> = std::result::Result<T, MailbitsError>;

impl MailbitsError {
    /// Create an `Io` variant from a path and an `io::Error`.
    ///
    /// A missing file is reported as [`MailbitsError::FileNotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::FileNotFound(path);
        }
        Self::Io { path, source }
    }
}

/// A single address candidate that could not be turned into an
/// [`EmailAddress`](crate::model::address::EmailAddress).
#[derive(Error, Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AddressError {
    /// The candidate matched neither `name <address>` nor a bare address.
    #[error("could not parse `{raw_input}`")]
    NoMatch { raw_input: String },

    /// A double-quoted span was opened and never closed.
    #[error("unterminated quoted name in `{raw_input}`")]
    UnterminatedQuote { raw_input: String },
}

impl AddressError {
    /// The exact candidate text that failed.
    pub fn raw_input(&self) -> &str {
        match self {
            Self::NoMatch { raw_input } | Self::UnterminatedQuote { raw_input } => raw_input,
        }
    }
}

/// Failure to extract a domain from an address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input has no `@`.
    #[error("failed to extract domain from `{0}`")]
    NotAnAddress(String),

    /// The requested number of labels is below 1.
    #[error("`n` must be greater or equal to 1, got {0}")]
    InvalidCount(i64),
}
