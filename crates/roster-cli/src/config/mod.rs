//! Configuration resolution for the binary.
//!
//! Two groups, both fed by CLI flags and environment variables (with an
//! optional `.env` file loaded first):
//!
//! ```text
//! Cli
//! ├── server: ServerConfig    # host, port, timeouts
//! └── service: ServiceConfig  # database connection and pool sizing
//! ```

mod server;

use clap::Parser;
use roster_server::service::ServiceConfig;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;

/// The fully parsed command line.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "roster")]
#[command(about = "Roster user-record service")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// External service configuration (database).
    #[clap(flatten)]
    pub service: ServiceConfig,
}

impl Cli {
    /// Loads `.env` (if present) and parses the command line.
    ///
    /// The `.env` load must happen before clap runs so those variables are
    /// visible as argument defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_defaults() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert_eq!(cli.server.port, 5000);
        assert_eq!(cli.service.postgres_max_connections, 10);
    }

    #[test]
    fn parses_explicit_arguments() {
        let cli = Cli::try_parse_from([
            "roster",
            "--port",
            "8080",
            "--postgres-url",
            "postgresql://db.internal/roster",
        ])
        .unwrap();
        assert_eq!(cli.server.port, 8080);
        assert_eq!(cli.service.postgres_endpoint, "postgresql://db.internal/roster");
    }
}
