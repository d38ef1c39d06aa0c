#![cfg(target_arch = "wasm32")]

use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen_test::*;

use toolscope::models::user::{Role, Session, User};
use toolscope::session;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_session() -> Session {
    Session {
        user: User {
            id: "u1".into(),
            email: "ada@example.com".into(),
            name: "Ada".into(),
            role: Role::User,
        },
        token: "tok-123".into(),
    }
}

#[wasm_bindgen_test]
fn restore_round_trips_a_persisted_session() {
    session::clear();
    let active = sample_session();
    session::persist(&active);

    assert_eq!(session::restore(), Some(active));
    assert_eq!(session::token().as_deref(), Some("tok-123"));
    session::clear();
}

#[wasm_bindgen_test]
fn restore_degrades_to_none_when_storage_is_empty() {
    session::clear();
    assert_eq!(session::restore(), None);
    assert_eq!(session::token(), None);
}

#[wasm_bindgen_test]
fn restore_degrades_to_none_on_a_corrupt_user_record() {
    session::clear();
    LocalStorage::set("token", &"tok-123".to_owned()).unwrap();
    LocalStorage::set("user", &"not a user record".to_owned()).unwrap();

    assert_eq!(session::restore(), None);
    session::clear();
}

// The test browser has no backend listening, so the remote logout call fails;
// local state must be cleared regardless so the UI can never be stuck
// authenticated with a dead token.
#[wasm_bindgen_test]
async fn logout_clears_local_state_even_when_the_remote_call_fails() {
    session::clear();
    session::persist(&sample_session());
    assert!(session::restore().is_some());

    session::logout().await;

    assert_eq!(session::restore(), None);
    assert_eq!(session::token(), None);
}
