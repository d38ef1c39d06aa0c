//! Persisted session lifecycle: restored once at startup, written only by
//! login/register, cleared by logout. The live `Option<Session>` signal is
//! provided through Leptos context by the app shell.

use gloo_storage::{LocalStorage, Storage};
use leptos::logging::log;

use crate::models::user::Session;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Reads the persisted session back at startup. Anything missing or
/// unreadable degrades to "unauthenticated"; this never panics.
pub fn restore() -> Option<Session> {
    let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
    let user = LocalStorage::get(USER_KEY).ok()?;
    Some(Session { user, token })
}

pub fn persist(session: &Session) {
    if let Err(err) = LocalStorage::set(TOKEN_KEY, &session.token) {
        log!("[SESSION] Failed to persist token: {err:?}");
    }
    if let Err(err) = LocalStorage::set(USER_KEY, &session.user) {
        log!("[SESSION] Failed to persist user: {err:?}");
    }
}

pub fn clear() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
}

/// Bearer token for outgoing requests, if any.
pub fn token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

/// Ends the session. The remote call is best-effort: local state is cleared
/// whether or not the backend was reachable, so the UI can never be stuck
/// authenticated with a dead token.
pub async fn logout() {
    if let Err(err) = crate::api::auth::logout().await {
        log!("[SESSION] Remote logout failed, clearing local state anyway: {err}");
    }
    clear();
}
