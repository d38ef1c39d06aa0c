pub mod auth;
pub mod reviews;
pub mod tools;

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of one API operation, already reduced to something a user can read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response; the message comes from the JSON error body when the
    /// backend provided one.
    #[error("{0}")]
    Api(String),
    /// The request never produced a usable response (connection refused,
    /// malformed body, ...).
    #[error("Could not reach the server: {0}")]
    Network(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Attaches the bearer header when a token is persisted. Requests made while
/// unauthenticated simply go out without one.
pub(crate) fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match crate::session::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Pulls a human-readable message out of a JSON error body. The backend uses
/// `detail` (FastAPI convention) but auth endpoints have used `message`, so
/// both are accepted; anything unparseable falls back to the caller's text.
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["detail", "message"].iter().find_map(|key| {
                value
                    .get(key)
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned)
            })
        })
        .unwrap_or_else(|| fallback.to_owned())
}

pub(crate) async fn expect_json<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, ApiError> {
    if response.ok() {
        Ok(response.json::<T>().await?)
    } else {
        Err(fail(response, fallback).await)
    }
}

pub(crate) async fn expect_ok(response: Response, fallback: &str) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(fail(response, fallback).await)
    }
}

async fn fail(response: Response, fallback: &str) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    ApiError::Api(error_message(&body, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_key_is_preferred() {
        assert_eq!(
            error_message(r#"{"detail":"Tool not found"}"#, "Failed"),
            "Tool not found"
        );
    }

    #[test]
    fn message_key_is_accepted() {
        assert_eq!(
            error_message(r#"{"message":"Invalid credentials"}"#, "Failed"),
            "Invalid credentials"
        );
    }

    #[test]
    fn unparseable_or_empty_bodies_fall_back() {
        assert_eq!(error_message("<html>502</html>", "Failed to fetch tools"),
            "Failed to fetch tools");
        assert_eq!(error_message("", "Failed to fetch tools"), "Failed to fetch tools");
        // JSON, but not the shape we know
        assert_eq!(error_message(r#"{"detail":{"loc":[]}}"#, "Failed"), "Failed");
    }
}
