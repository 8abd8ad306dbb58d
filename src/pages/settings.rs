//! Account settings for the logged-in user.

use leptos::prelude::*;

use crate::net::auth::Authenticator;
use crate::state::messages::MessageLog;
use crate::state::session::SessionState;

#[cfg(feature = "browser")]
const CONFIRM_SENT_NOTICE: &str = "Confirmation email sent. Check your inbox.";

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<Authenticator>();
    let messages = expect_context::<RwSignal<MessageLog>>();
    let busy = RwSignal::new(false);

    let name = move || {
        session.with(|s| {
            s.active_user
                .as_ref()
                .map(|user| user.name.clone())
                .unwrap_or_default()
        })
    };
    let email = move || {
        session.with(|s| {
            s.active_user
                .as_ref()
                .and_then(|user| user.email.clone())
                .unwrap_or_default()
        })
    };
    let unconfirmed = move || {
        session.with(|s| {
            s.active_user
                .as_ref()
                .is_some_and(|user| !user.email_confirmed)
        })
    };

    let on_resend = StoredValue::new(move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "browser")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match auth.request_confirm_email().await {
                    Ok(()) => messages.update(|log| {
                        log.info(CONFIRM_SENT_NOTICE);
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
            let _ = (&auth, messages);
            busy.set(false);
        }
    });

    view! {
        <section class="page page--settings">
            <h1>"Settings"</h1>
            <Show
                when=move || session.with(|s| s.active_user.is_some())
                fallback=|| view! { <p>"Log in to manage your account."</p> }
            >
                <dl class="settings__fields">
                    <dt>"Name"</dt>
                    <dd>{name}</dd>
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                </dl>
                <Show when=unconfirmed>
                    <div class="settings__confirm">
                        <p>"Your email address has not been confirmed yet."</p>
                        <button on:click=move |ev| on_resend.with_value(|f| f(ev)) disabled=move || busy.get()>
                            "Resend confirmation email"
                        </button>
                    </div>
                </Show>
            </Show>
        </section>
    }
}
