//! Top navigation bar, session-aware.

use leptos::prelude::*;

use crate::net::auth::Authenticator;
use crate::state::session::SessionState;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let logged_in = move || session.with(|s| s.active_user.is_some());

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Community Share"</a>
            <div class="navbar__links">
                <Show
                    when=logged_in
                    fallback=|| view! {
                        <a href="/login">"Log In"</a>
                        <a href="/signup/choice">"Sign Up"</a>
                    }
                >
                    <SessionLinks/>
                </Show>
            </div>
        </nav>
    }
}

/// Links shown while logged in. Split out so the logout handler can own
/// its authenticator clone.
#[component]
fn SessionLinks() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<Authenticator>();

    let name = move || {
        session.with(|s| {
            s.active_user
                .as_ref()
                .map(|user| user.name.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <span class="navbar__user">{name}</span>
        <a href="/settings">"Settings"</a>
        <button class="navbar__logout" on:click=move |_| auth.logout()>
            "Log Out"
        </button>
    }
}
