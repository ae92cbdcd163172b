//! Startup-time errors.
//!
//! Failures while assembling the service (bad configuration, unreachable
//! database, failed migrations) before the first request is handled. Request
//! handling has its own error type in [`crate::handler`].

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// Boxed error that can cross thread boundaries.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Shorthand [`Result`] for service assembly.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// What part of service assembly failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid or missing configuration.
    Config,
    /// Database connectivity or migrations.
    Database,
}

impl ErrorKind {
    /// Returns the kind as a short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Database => "database",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service assembly failure: a kind, a message, and an optional cause.
#[derive(Debug, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    #[source]
    source: Option<BoxedError>,
}

impl Error {
    #[inline]
    fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    /// Creates a database error.
    pub fn database(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Attaches the underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxedError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_kind_and_message() {
        let error = Error::database("Failed to apply database migrations");
        assert_eq!(error.kind(), ErrorKind::Database);
        assert_eq!(error.message(), "Failed to apply database migrations");
        assert!(error.to_string().contains("database error"));
    }

    #[test]
    fn chains_source_errors() {
        let source = std::io::Error::other("connection refused");
        let error = Error::config("Invalid endpoint").with_source(source);

        let chained = StdError::source(&error).expect("source should be set");
        assert!(chained.to_string().contains("connection refused"));
    }
}
