/// Typed errors for the transport seam.
///
/// Retry behavior is driven by matching on these variants, not by
/// inspecting error text: `DeleteError::RateLimited` is the one
/// recoverable case, everything else during deletion is a per-batch
/// failure, and any `GatewayError` during scanning is fatal to the
/// whole operation.

use std::time::Duration;
use thiserror::Error;

/// Stream/transport failure. Fatal: aborts the operation that hit it.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("authentication rejected: {0}")]
    Auth(String),

    #[error("malformed response from platform: {0}")]
    Protocol(String),
}

/// Failure of one delete-batch call.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The service's request quota is exhausted; it mandates how long to
    /// wait before sending anything else.
    #[error("rate limited, server mandates a {}s wait", .wait.as_secs())]
    RateLimited { wait: Duration },

    /// The batch was refused outright (permissions, malformed ids, …).
    #[error("batch rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
