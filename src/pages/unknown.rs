//! Fallback view for unmatched paths.

use leptos::prelude::*;

#[component]
pub fn UnknownPage() -> impl IntoView {
    view! {
        <section class="page page--unknown">
            <h1>"Unknown Route"</h1>
            <p>"The page you were looking for does not exist."</p>
            <p><a href="/">"Back to Community Share"</a></p>
        </section>
    }
}
