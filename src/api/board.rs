//! Board Endpoints
//!
//! One async fn per backend operation on board entries and their comments.
//! Mount-lifecycle fetches take an optional abort signal so a screen can
//! cancel them when it unmounts; fire-and-forget mutations take none.

use gloo_net::http::Request;
use serde::Serialize;
use web_sys::AbortSignal;

use super::{check_status, ApiError};
use crate::models::{Board, Comment};

#[derive(Serialize)]
struct NewComment<'a> {
    text: &'a str,
}

/// GET /board — every entry, unpaginated (paging happens client-side)
pub async fn list_boards(signal: Option<&AbortSignal>) -> Result<Vec<Board>, ApiError> {
    let response = Request::get("/board").abort_signal(signal).send().await?;
    Ok(check_status(response)?.json().await?)
}

/// GET /board/{id} — a single entry
pub async fn get_board(id: u32, signal: Option<&AbortSignal>) -> Result<Board, ApiError> {
    let response = Request::get(&format!("/board/{id}"))
        .abort_signal(signal)
        .send()
        .await?;
    Ok(check_status(response)?.json().await?)
}

/// GET /board/{id}/comments — comments for an entry
pub async fn list_comments(
    id: u32,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Comment>, ApiError> {
    let response = Request::get(&format!("/board/{id}/comments"))
        .abort_signal(signal)
        .send()
        .await?;
    Ok(check_status(response)?.json().await?)
}

/// POST /board/{id}/incrementView — record a non-author view.
///
/// Deliberately not abortable: the caller navigates away immediately and
/// the increment should still land.
pub async fn increment_view(id: u32) -> Result<(), ApiError> {
    let response = Request::post(&format!("/board/{id}/incrementView"))
        .send()
        .await?;
    check_status(response)?;
    Ok(())
}

/// POST /board/{id}/comment — append a comment, returns the stored comment
pub async fn post_comment(id: u32, text: &str) -> Result<Comment, ApiError> {
    let response = Request::post(&format!("/board/{id}/comment"))
        .json(&NewComment { text })?
        .send()
        .await?;
    Ok(check_status(response)?.json().await?)
}

/// DELETE /board/{id} — remove an entry
pub async fn delete_board(id: u32) -> Result<(), ApiError> {
    let response = Request::delete(&format!("/board/{id}")).send().await?;
    check_status(response)?;
    Ok(())
}
