//! Landing page for the root route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route is session-gated, so by construction the session has
//! resolved here; the page still renders something sensible for a
//! resolved-but-unauthenticated visitor (soft gating).

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::SessionState;

fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}.", user.name),
        None => "Welcome to Community Share.".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let logged_out = move || session.with(|s| s.active_user.is_none());

    view! {
        <section class="page page--home">
            <h1>"Community Share"</h1>
            <p class="home__greeting">
                {move || session.with(|s| greeting(s.active_user.as_ref()))}
            </p>
            <Show when=logged_out>
                <p class="home__cta">
                    <a href="/signup/choice">"Join the community"</a>
                    " or "
                    <a href="/login">"log in"</a>
                    " to find a match."
                </p>
            </Show>
        </section>
    }
}
