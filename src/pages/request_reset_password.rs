//! Request a password-reset email.

#[cfg(test)]
#[path = "request_reset_password_test.rs"]
mod request_reset_password_test;

use leptos::prelude::*;

use crate::net::auth::Authenticator;
use crate::state::messages::MessageLog;

#[cfg(any(test, feature = "browser"))]
pub(crate) const RESET_SENT_NOTICE: &str = "Password reset email sent. Check your inbox.";

pub(crate) fn validate_email_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    Ok(email.to_owned())
}

#[component]
pub fn RequestResetPasswordPage() -> impl IntoView {
    let auth = expect_context::<Authenticator>();
    let messages = expect_context::<RwSignal<MessageLog>>();

    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email_input(&email.get()) {
            Ok(value) => value,
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
            leptos::task::spawn_local(async move {
                match auth.request_reset_password(&email_value).await {
                    Ok(_) => messages.update(|log| {
                        log.info(RESET_SENT_NOTICE);
                    }),
                    Err(message) => messages.update(|log| {
                        log.error(message);
                    }),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (&auth, email_value);
            busy.set(false);
        }
    };

    view! {
        <section class="page page--request-reset">
            <div class="login-card">
                <h1>"Reset Password"</h1>
                <p>"We will email you a link to choose a new password."</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Send Reset Email"
                    </button>
                </form>
            </div>
        </section>
    }
}
