//! REST API Wrappers
//!
//! Typed async bindings to the board backend, organized by domain. Each
//! call is one request/response round trip; callers decide whether a
//! failure is surfaced, logged, or dropped.

mod auth;
mod board;

pub mod abort;

use gloo_net::http::Response;
use thiserror::Error;

pub use auth::*;
pub use board::*;

/// Failure of a single API round trip
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server returned status {0}")]
    Status(u16),
}

impl ApiError {
    /// True when the request was cancelled through its abort signal.
    /// Cancelled requests are expected during unmount and must not be
    /// reported as failures.
    pub fn is_abort(&self) -> bool {
        matches!(
            self,
            ApiError::Network(gloo_net::Error::JsError(err)) if err.name == "AbortError"
        )
    }
}

/// Reject non-2xx responses before decoding the body
fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}
