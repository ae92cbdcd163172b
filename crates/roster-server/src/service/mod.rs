//! Application state, configuration, and startup error handling.

mod config;
mod error;
mod state;

pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use state::ServiceState;
