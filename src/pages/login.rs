//! Login page: email + password against `/api/requestapikey`.
//!
//! ERROR HANDLING
//! ==============
//! The credential flow swallows its error and resolves the session
//! unauthenticated, so this page decides success by looking at the
//! session after the call and flashes a generic failure notice.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::Authenticator;
use crate::state::messages::MessageLog;
use crate::state::session::SessionState;

#[cfg(any(test, feature = "browser"))]
pub(crate) const LOGIN_FAILED_NOTICE: &str = "Email or password not recognized.";

pub(crate) fn validate_login_input(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<Authenticator>();
    let session = expect_context::<RwSignal<SessionState>>();
    let messages = expect_context::<RwSignal<MessageLog>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
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
                auth.authenticate_with_credentials(&email_value, &password_value)
                    .await;
                let logged_in = session.with_untracked(|s| s.active_user.is_some());
                if logged_in {
                    navigate("/", NavigateOptions::default());
                } else {
                    messages.update(|log| {
                        log.error(LOGIN_FAILED_NOTICE);
                    });
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (&auth, &navigate, session, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <section class="page page--login">
            <div class="login-card">
                <h1>"Log In"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log In"
                    </button>
                </form>
                <p class="login-links">
                    <a href="/requestresetpassword">"Forgot your password?"</a>
                    " \u{b7} "
                    <a href="/signup/choice">"Create an account"</a>
                </p>
            </div>
        </section>
    }
}
