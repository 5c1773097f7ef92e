//! Error types for the Product client.

use super::transport::TransportError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    /// The request never completed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A list or info request answered with a non-2xx status.
    #[error("Unexpected status: {status}")]
    UnexpectedStatus { status: u16 },

    /// The service refused a create request and explained why.
    #[error("Request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },
}

impl ProductError {
    /// Whether the failure should be shown to the user rather than only logged.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ProductError::Rejected { .. })
    }

    /// Alert text for a user-facing failure: `Error: {detail}`.
    pub fn user_message(&self) -> String {
        match self {
            ProductError::Rejected { detail, .. } => format!("Error: {}", detail),
            other => format!("Error: {}", other),
        }
    }
}
