//! Auth Endpoints
//!
//! Session-token resolution. The only call that carries the Bearer header.

use gloo_net::http::Request;
use web_sys::AbortSignal;

use super::{check_status, ApiError};
use crate::models::User;

/// GET /api/auth/currentUser — resolve the session token to a user
pub async fn current_user(token: &str, signal: Option<&AbortSignal>) -> Result<User, ApiError> {
    let response = Request::get("/api/auth/currentUser")
        .header("Authorization", &format!("Bearer {token}"))
        .abort_signal(signal)
        .send()
        .await?;
    Ok(check_status(response)?.json().await?)
}
