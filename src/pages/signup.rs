//! Signup page shared by the educator and community-partner routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signup doubles as a login: on success the authenticator has already
//! installed the granted key and resolved the session, so this page only
//! navigates home. Server-side failures (e.g. email already in use) come
//! back as messages and are flashed.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::Authenticator;
use crate::net::types::NewUser;
use crate::state::messages::MessageLog;

/// Which kind of account the route signs up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupKind {
    Educator,
    CommunityPartner,
}

impl SignupKind {
    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::Educator => "Educator Sign Up",
            Self::CommunityPartner => "Community Partner Sign Up",
        }
    }
}

/// Minimum the server accepts; checked client-side to save a round trip.
const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Enter both a name and an email address.");
    }
    if !email.contains('@') {
        return Err("That email address does not look right.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters long.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((name.to_owned(), email.to_owned()))
}

pub(crate) fn build_signup_user(kind: SignupKind, name: String, email: String, zipcode: String) -> NewUser {
    let zipcode = zipcode.trim();
    NewUser {
        name,
        email,
        is_educator: kind == SignupKind::Educator,
        is_community_partner: kind == SignupKind::CommunityPartner,
        zipcode: if zipcode.is_empty() {
            None
        } else {
            Some(zipcode.to_owned())
        },
    }
}

#[component]
pub fn SignupPage(kind: SignupKind) -> impl IntoView {
    let auth = expect_context::<Authenticator>();
    let messages = expect_context::<RwSignal<MessageLog>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let zipcode = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value) = match validate_signup_input(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(values) => values,
            Err(notice) => {
                messages.update(|log| {
                    log.error(notice);
                });
                return;
            }
        };
        let user = build_signup_user(kind, name_value, email_value, zipcode.get());
        let password_value = password.get();
        busy.set(true);

        #[cfg(feature = "browser")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.sign_up(&user, &password_value).await {
                    Ok(_) => navigate("/", NavigateOptions::default()),
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
            let _ = (&auth, &navigate, user, password_value);
            busy.set(false);
        }
    };

    view! {
        <section class="page page--signup">
            <div class="signup-card">
                <h1>{kind.title()}</h1>
                <form class="signup-form" on:submit=on_submit>
                    <input
                        class="signup-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="signup-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="signup-input"
                        type="text"
                        placeholder="Zipcode (optional)"
                        prop:value=move || zipcode.get()
                        on:input=move |ev| zipcode.set(event_target_value(&ev))
                    />
                    <input
                        class="signup-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="signup-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="signup-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
            </div>
        </section>
    }
}
