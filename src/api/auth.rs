use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use super::{expect_json, expect_ok, with_auth, ApiError};
use crate::constants::API_BASE;
use crate::models::user::User;

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let response = Request::post(&format!("{API_BASE}/auth/login"))
        .json(&LoginBody { email, password })?
        .send()
        .await?;
    expect_json(response, "Login failed").await
}

pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let response = Request::post(&format!("{API_BASE}/auth/register"))
        .json(&RegisterBody {
            name,
            email,
            password,
        })?
        .send()
        .await?;
    expect_json(response, "Registration failed").await
}

pub async fn logout() -> Result<(), ApiError> {
    let response = with_auth(Request::post(&format!("{API_BASE}/auth/logout")))
        .send()
        .await?;
    expect_ok(response, "Logout failed").await
}

/// Current profile for the stored token. Lets the app notice an invalidated
/// token without waiting for another call to fail.
pub async fn current_user() -> Result<User, ApiError> {
    let response = with_auth(Request::get(&format!("{API_BASE}/auth/me")))
        .send()
        .await?;
    expect_json(response, "Failed to get user profile").await
}
