use gloo_net::http::Request;

use super::{expect_json, expect_ok, with_auth, ApiError};
use crate::constants::API_BASE;
use crate::models::filters::Filters;
use crate::models::tool::{Tool, ToolPayload};

pub async fn list(filters: &Filters) -> Result<Vec<Tool>, ApiError> {
    let params = filters.to_query();
    let request = with_auth(Request::get(&format!("{API_BASE}/tools")))
        .query(params.iter().map(|(key, value)| (*key, value.as_str())));
    let response = request.send().await?;
    expect_json(response, "Failed to fetch tools").await
}

pub async fn create(payload: &ToolPayload) -> Result<Tool, ApiError> {
    let response = with_auth(Request::post(&format!("{API_BASE}/tools")))
        .json(payload)?
        .send()
        .await?;
    expect_json(response, "Failed to add tool").await
}

pub async fn update(id: &str, payload: &ToolPayload) -> Result<Tool, ApiError> {
    let response = with_auth(Request::put(&format!("{API_BASE}/tools/{id}")))
        .json(payload)?
        .send()
        .await?;
    expect_json(response, "Failed to update tool").await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    let response = with_auth(Request::delete(&format!("{API_BASE}/tools/{id}")))
        .send()
        .await?;
    expect_ok(response, "Failed to delete tool").await
}
