//! Status response types for the welcome and health endpoints.

use serde::{Deserialize, Serialize};

/// Plain status envelope without a payload.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Whether the request was handled successfully.
    pub success: bool,
    /// Human-readable status description.
    pub message: String,
}

impl StatusMessage {
    /// Welcome message served at the service root.
    pub fn welcome() -> Self {
        Self {
            success: true,
            message: "Welcome to our page!".to_owned(),
        }
    }

    /// Reported when the service and its store are reachable.
    pub fn healthy() -> Self {
        Self {
            success: true,
            message: "Service is healthy".to_owned(),
        }
    }

    /// Reported when the store connectivity probe fails.
    pub fn unhealthy() -> Self {
        Self {
            success: false,
            message: "Service is temporarily unavailable".to_owned(),
        }
    }
}
