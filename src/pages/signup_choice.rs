//! Account-type chooser shown before signup.

use leptos::prelude::*;

#[component]
pub fn SignupChoicePage() -> impl IntoView {
    view! {
        <section class="page page--signup-choice">
            <h1>"Join Community Share"</h1>
            <p>"Which best describes you?"</p>
            <div class="signup-choice__options">
                <a class="signup-choice__option" href="/signup/educator">
                    <h2>"Educator"</h2>
                    <p>"I want to bring community partners into my classroom."</p>
                </a>
                <a class="signup-choice__option" href="/signup/communitypartner">
                    <h2>"Community Partner"</h2>
                    <p>"I want to share what I do with local classrooms."</p>
                </a>
            </div>
        </section>
    }
}
