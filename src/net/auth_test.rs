#![cfg(not(feature = "browser"))]

use futures::FutureExt;
use futures::executor::block_on;
use leptos::prelude::*;

use super::*;
use crate::net::types::User;

fn authenticator() -> (Authenticator, RwSignal<SessionState>, RwSignal<MessageLog>) {
    let session = RwSignal::new(SessionState::new());
    let messages = RwSignal::new(MessageLog::default());
    let auth = Authenticator::new(Api::default(), session, messages);
    (auth, session, messages)
}

#[test]
fn cookie_auth_without_stored_credentials_resolves_unauthenticated() {
    let (auth, session, _) = authenticator();
    let future = session.with_untracked(SessionState::user_future);

    // Outside the browser the cookie jar is empty, so this is the
    // "no stored credentials" path: no HTTP, session resolved to None.
    let outcome = block_on(auth.authenticate_from_cookie());
    assert_eq!(outcome, Err("no stored credentials".to_owned()));
    assert_eq!(future.now_or_never(), Some(None));
    assert!(session.with_untracked(|s| !s.pending));
    assert!(session.with_untracked(|s| s.active_user.is_none()));
}

#[test]
fn credential_login_failure_is_swallowed_and_resolves_unauthenticated() {
    let (auth, session, _) = authenticator();

    // The native API stub fails every call; the flow must not propagate
    // that error, only leave the session unauthenticated.
    block_on(auth.authenticate_with_credentials("a@b.com", "pw"));
    assert!(session.with_untracked(|s| !s.pending));
    assert!(session.with_untracked(|s| s.active_user.is_none()));
    assert_eq!(
        session.with_untracked(SessionState::user_future).now_or_never(),
        Some(None)
    );
}

#[test]
fn credential_login_sets_the_login_authorization_header() {
    // Header formatting itself is covered in api_test; here we check the
    // authenticator installs it before the request goes out.
    let session = RwSignal::new(SessionState::new());
    let messages = RwSignal::new(MessageLog::default());
    let api = Api::default();
    let auth = Authenticator::new(api.clone(), session, messages);
    block_on(auth.authenticate_with_credentials("a@b.com", "pw"));
    assert_eq!(api.authorization().as_deref(), Some("Basic:a@b.com:pw"));
}

#[test]
fn sign_up_failure_returns_the_message_and_leaves_session_unauthenticated() {
    let (auth, session, _) = authenticator();
    let user = NewUser {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        is_educator: true,
        ..NewUser::default()
    };

    let outcome = block_on(auth.sign_up(&user, "longenough"));
    assert!(outcome.is_err());
    assert!(session.with_untracked(|s| !s.pending));
    assert!(session.with_untracked(|s| s.active_user.is_none()));
}

#[test]
fn logout_clears_credentials_and_resolves_unauthenticated() {
    let session = RwSignal::new(SessionState::new());
    let messages = RwSignal::new(MessageLog::default());
    let api = Api::default();
    let auth = Authenticator::new(api.clone(), session, messages);

    // Simulate a logged-in session.
    api.set_authorization(Some("Basic:api:K1".to_owned()));
    session.update(|s| {
        let attempt = s.current_attempt();
        s.finish_attempt(
            attempt,
            Some(User {
                id: 7,
                name: "Ada".to_owned(),
                ..User::default()
            }),
        );
    });

    auth.logout();
    assert_eq!(api.authorization(), None);
    assert!(session.with_untracked(|s| s.active_user.is_none()));
    assert!(session.with_untracked(|s| !s.pending));
    assert_eq!(
        session.with_untracked(SessionState::user_future).now_or_never(),
        Some(None)
    );

    // Idempotent.
    auth.logout();
    assert_eq!(api.authorization(), None);
}

#[test]
fn confirm_email_failure_resolves_unauthenticated() {
    let (auth, session, _) = authenticator();
    let outcome = block_on(auth.confirm_email("token"));
    assert!(outcome.is_err());
    assert!(session.with_untracked(|s| !s.pending));
    assert!(session.with_untracked(|s| s.active_user.is_none()));
}
