//! Network and lifecycle settings for the HTTP server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};

/// Where to bind and how long to wait.
///
/// Every field can come from the command line or the environment:
/// `HOST` (default 127.0.0.1), `PORT` (default 5000), `REQUEST_TIMEOUT`
/// and `SHUTDOWN_TIMEOUT` (seconds, default 30, at most 300).
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ServerConfig {
    /// Host address to bind the server to.
    ///
    /// "127.0.0.1" keeps the service local; "0.0.0.0" exposes it on every
    /// interface.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// TCP port to listen on.
    ///
    /// Ports below 1024 need root and are rejected by validation.
    #[arg(short = 'p', long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Seconds before an in-flight request is cut off.
    #[arg(long, env = "REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,

    /// Seconds to wait for in-flight requests during graceful shutdown.
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 30)]
    pub shutdown_timeout: u64,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

impl ServerConfig {
    /// Checks every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns an error when the port is privileged (< 1024) or a timeout is
    /// zero or above 300 seconds.
    pub fn validate(&self) -> AnyhowResult<()> {
        if self.port < 1024 {
            return Err(anyhow!(
                "port {} is privileged, pick one in the range 1024-65535",
                self.port
            ));
        }

        if self.request_timeout == 0 || self.request_timeout > 300 {
            return Err(anyhow!(
                "request timeout of {}s is out of range (1-300)",
                self.request_timeout
            ));
        }

        if self.shutdown_timeout == 0 || self.shutdown_timeout > 300 {
            return Err(anyhow!(
                "shutdown timeout of {}s is out of range (1-300)",
                self.shutdown_timeout
            ));
        }

        Ok(())
    }

    /// Returns the address to bind.
    #[inline]
    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the request timeout as a [`Duration`].
    #[inline]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Returns the shutdown timeout as a [`Duration`].
    #[inline]
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }

    /// True when bound to every interface rather than a specific one.
    #[inline]
    pub fn binds_to_all_interfaces(&self) -> bool {
        self.host.is_unspecified()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 5000,
            request_timeout: 30,
            shutdown_timeout: 30,
        }
    }
}
