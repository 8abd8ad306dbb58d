use super::*;
use crate::net::types::User;

#[test]
fn gate_stays_closed_while_session_is_pending() {
    let session = SessionState::new();
    assert!(!gate_open(&session));
}

#[test]
fn gate_opens_once_resolved_even_when_unauthenticated() {
    let mut session = SessionState::new();
    let attempt = session.current_attempt();
    session.finish_attempt(attempt, None);
    assert!(gate_open(&session));
}

#[test]
fn gate_opens_for_an_authenticated_session() {
    let mut session = SessionState::new();
    let attempt = session.current_attempt();
    session.finish_attempt(
        attempt,
        Some(User {
            id: 1,
            name: "Ada".to_owned(),
            ..User::default()
        }),
    );
    assert!(gate_open(&session));
}

#[test]
fn gate_closes_again_when_a_new_attempt_begins() {
    let mut session = SessionState::new();
    let attempt = session.current_attempt();
    session.finish_attempt(attempt, None);
    session.begin_attempt();
    assert!(!gate_open(&session));
}
