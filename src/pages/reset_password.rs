//! Choose a new password using an emailed reset token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the reset email as `/resetpassword?key=...`; the page is
//! public since the visitor is by definition logged out.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::auth::Authenticator;
use crate::state::messages::MessageLog;

#[cfg(any(test, feature = "browser"))]
pub(crate) const RESET_DONE_NOTICE: &str = "Password has been reset. Log in with your new password.";

const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn validate_reset_input(
    key: Option<&str>,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let Some(key) = key.filter(|key| !key.is_empty()) else {
        return Err("Missing reset key. Use the link from your email.");
    };
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters long.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((key.to_owned(), password.to_owned()))
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = expect_context::<Authenticator>();
    let messages = expect_context::<RwSignal<MessageLog>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let key = query.with_untracked(|q| q.get("key"));
        let (key_value, password_value) =
            match validate_reset_input(key.as_deref(), &password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(notice) => {
                    messages.update(|log| {
                        log.error(notice);
                    });
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "browser")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.reset_password(&key_value, &password_value).await {
                    Ok(_) => {
                        messages.update(|log| {
                            log.info(RESET_DONE_NOTICE);
                        });
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(message) => {
                        messages.update(|log| {
                            log.error(message);
                        });
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (&auth, &navigate, key_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <section class="page page--reset-password">
            <div class="login-card">
                <h1>"Choose a New Password"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="New password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Set Password"
                    </button>
                </form>
            </div>
        </section>
    }
}
