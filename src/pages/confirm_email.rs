//! Redeem an emailed confirmation token (`/confirmemail?key=...`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Confirmation doubles as a login: on success the authenticator has
//! installed the fresh key and resolved the session with the confirmed
//! user. The page runs the redemption once on mount and reports status
//! inline.

#[cfg(test)]
#[path = "confirm_email_test.rs"]
mod confirm_email_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::auth::Authenticator;

/// Inline status of the one-shot confirmation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ConfirmStatus {
    Working,
    MissingKey,
    Confirmed,
    Failed(String),
}

pub(crate) fn status_text(status: &ConfirmStatus) -> String {
    match status {
        ConfirmStatus::Working => "Confirming your email address...".to_owned(),
        ConfirmStatus::MissingKey => {
            "No confirmation key found. Use the link from your email.".to_owned()
        }
        ConfirmStatus::Confirmed => "Your email address is confirmed.".to_owned(),
        ConfirmStatus::Failed(message) => format!("Email confirmation failed: {message}"),
    }
}

#[component]
pub fn ConfirmEmailPage() -> impl IntoView {
    let auth = expect_context::<Authenticator>();
    let query = use_query_map();
    let status = RwSignal::new(ConfirmStatus::Working);

    let key = query.with_untracked(|q| q.get("key")).filter(|key| !key.is_empty());
    match key {
        None => status.set(ConfirmStatus::MissingKey),
        Some(key) => {
            #[cfg(feature = "browser")]
            {
                let auth = auth.clone();
                leptos::task::spawn_local(async move {
                    match auth.confirm_email(&key).await {
                        Ok(_) => status.set(ConfirmStatus::Confirmed),
                        Err(message) => status.set(ConfirmStatus::Failed(message)),
                    }
                });
            }
            #[cfg(not(feature = "browser"))]
            {
                let _ = (&auth, key);
                status.set(ConfirmStatus::Failed(
                    "not available outside the browser".to_owned(),
                ));
            }
        }
    }

    view! {
        <section class="page page--confirm-email">
            <h1>"Email Confirmation"</h1>
            <p class="confirm-email__status">{move || status.with(status_text)}</p>
            <Show when=move || status.get() == ConfirmStatus::Confirmed>
                <p><a href="/">"Continue to Community Share"</a></p>
            </Show>
        </section>
    }
}
