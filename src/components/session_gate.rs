//! Route precondition: delay page construction until the session resolves.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated routes wrap their page in [`SessionGate`] so views never render
//! against an indeterminate session. The gate only delays — it does not
//! redirect unauthenticated visitors; login/signup/reset routes skip it
//! entirely so they stay reachable while logged out.

#[cfg(test)]
#[path = "session_gate_test.rs"]
mod session_gate_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Whether the gate may construct its children yet.
pub(crate) fn gate_open(session: &SessionState) -> bool {
    !session.pending
}

#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    view! {
        <Show
            when=move || session.with(gate_open)
            fallback=|| view! { <p class="session-gate">"Checking session..."</p> }
        >
            {children()}
        </Show>
    }
}
