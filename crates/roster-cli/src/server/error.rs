//! Server lifecycle error types.

use std::io;

/// Errors that can occur while starting or running the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Server configuration failed validation.
    #[error("invalid server configuration: {0}")]
    InvalidConfig(String),

    /// The listener could not be bound to the requested address.
    #[error("failed to bind to {address}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    /// The server terminated with a runtime error.
    #[error("server runtime error")]
    Runtime(#[source] io::Error),
}

/// A specialized [`Result`] type for server lifecycle operations.
pub type Result<T, E = ServerError> = std::result::Result<T, E>;
