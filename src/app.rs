//! Application root: shared context and the route table.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the singletons (session, flash log, API client,
//! authenticator), provides them through context, kicks off the cookie
//! bootstrap, and maps every route to its page. Gated routes wrap their
//! page in `SessionGate` so they construct only once the session has
//! resolved; login, signup-choice, and the password/email recovery routes
//! stay ungated so a logged-out visitor can reach them.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::flash_messages::FlashMessages;
use crate::components::navbar::Navbar;
use crate::components::session_gate::SessionGate;
use crate::net::api::Api;
use crate::net::auth::Authenticator;
use crate::pages::confirm_email::ConfirmEmailPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::request_reset_password::RequestResetPasswordPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::settings::SettingsPage;
use crate::pages::signup::{SignupKind, SignupPage};
use crate::pages::signup_choice::SignupChoicePage;
use crate::pages::unknown::UnknownPage;
use crate::pages::user_view::UserPage;
use crate::state::messages::MessageLog;
use crate::state::session::SessionState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::new());
    let messages = RwSignal::new(MessageLog::default());
    let api = Api::default();
    let auth = Authenticator::new(api.clone(), session, messages);
    provide_context(session);
    provide_context(messages);
    provide_context(api);
    provide_context(auth.clone());

    // Resume any cookie session once at startup; gated routes wait on the
    // resolution.
    #[cfg(feature = "browser")]
    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            if let Err(reason) = auth.authenticate_from_cookie().await {
                log::debug!("no session resumed: {reason}");
            }
        });
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = auth;
    }

    view! {
        <Title text="Community Share"/>
        <Router>
            <Navbar/>
            <FlashMessages/>
            <main class="content">
                <Routes fallback=UnknownPage>
                    <Route
                        path=path!("/")
                        view=|| view! { <SessionGate><HomePage/></SessionGate> }
                    />
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/signup/choice") view=SignupChoicePage/>
                    <Route
                        path=path!("/signup/educator")
                        view=|| view! {
                            <SessionGate>
                                <SignupPage kind=SignupKind::Educator/>
                            </SessionGate>
                        }
                    />
                    <Route
                        path=path!("/signup/communitypartner")
                        view=|| view! {
                            <SessionGate>
                                <SignupPage kind=SignupKind::CommunityPartner/>
                            </SessionGate>
                        }
                    />
                    <Route path=path!("/requestresetpassword") view=RequestResetPasswordPage/>
                    <Route path=path!("/resetpassword") view=ResetPasswordPage/>
                    <Route path=path!("/confirmemail") view=ConfirmEmailPage/>
                    <Route
                        path=path!("/settings")
                        view=|| view! { <SessionGate><SettingsPage/></SessionGate> }
                    />
                    <Route
                        path=path!("/user/:id")
                        view=|| view! { <SessionGate><UserPage/></SessionGate> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
