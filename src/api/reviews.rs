use gloo_net::http::Request;
use serde::Serialize;

use super::{expect_json, with_auth, ApiError};
use crate::constants::API_BASE;
use crate::models::review::{Review, ReviewPayload, ReviewStatus};

pub async fn list(status: Option<ReviewStatus>) -> Result<Vec<Review>, ApiError> {
    let mut request = with_auth(Request::get(&format!("{API_BASE}/reviews")));
    if let Some(status) = status {
        request = request.query([("status", status.as_str())]);
    }
    let response = request.send().await?;
    expect_json(response, "Failed to fetch reviews").await
}

/// Full review history for one tool, regardless of moderation status.
pub async fn for_tool(tool_id: &str) -> Result<Vec<Review>, ApiError> {
    let response = with_auth(Request::get(&format!("{API_BASE}/reviews")))
        .query([("tool_id", tool_id)])
        .send()
        .await?;
    expect_json(response, "Failed to fetch reviews").await
}

pub async fn submit(payload: &ReviewPayload) -> Result<Review, ApiError> {
    let response = with_auth(Request::post(&format!("{API_BASE}/reviews")))
        .json(payload)?
        .send()
        .await?;
    expect_json(response, "Failed to submit review").await
}

#[derive(Serialize)]
struct ModerationBody {
    status: ReviewStatus,
}

/// Approve or reject a pending review. The backend recomputes the tool's
/// average rating as a side effect, so callers refetch the catalog afterwards.
pub async fn moderate(id: &str, status: ReviewStatus) -> Result<Review, ApiError> {
    let response = with_auth(Request::patch(&format!("{API_BASE}/reviews/{id}")))
        .json(&ModerationBody { status })?
        .send()
        .await?;
    expect_json(response, "Failed to moderate review").await
}
