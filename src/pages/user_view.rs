//! Profile page for a single user (`/user/:id`).

#[cfg(test)]
#[path = "user_view_test.rs"]
mod user_view_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::Api;
use crate::net::types::User;

pub(crate) fn parse_user_id(raw: Option<&str>) -> Result<i64, &'static str> {
    raw.and_then(|raw| raw.parse().ok())
        .ok_or("That profile link is not valid.")
}

#[component]
pub fn UserPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let params = use_params_map();

    let profile = RwSignal::new(None::<User>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let raw = params.with(|p| p.get("id"));
        match parse_user_id(raw.as_deref()) {
            Ok(id) => {
                profile.set(None);
                error.set(None);
                #[cfg(feature = "browser")]
                {
                    let api = api.clone();
                    leptos::task::spawn_local(async move {
                        match api.fetch_user(id).await {
                            Ok(user) => profile.set(Some(user)),
                            Err(message) => error.set(Some(message)),
                        }
                    });
                }
                #[cfg(not(feature = "browser"))]
                {
                    let _ = (&api, id);
                }
            }
            Err(notice) => error.set(Some(notice.to_owned())),
        }
    });

    view! {
        <section class="page page--user">
            <Show
                when=move || profile.with(Option::is_some)
                fallback=move || view! {
                    <p class="user__status">
                        {move || error.get().unwrap_or_else(|| "Loading profile...".to_owned())}
                    </p>
                }
            >
                <UserDetails profile=profile/>
            </Show>
        </section>
    }
}

#[component]
fn UserDetails(profile: RwSignal<Option<User>>) -> impl IntoView {
    let field = move |f: fn(&User) -> Option<String>| {
        move || profile.with(|p| p.as_ref().and_then(f))
    };

    view! {
        <h1>{move || profile.with(|p| p.as_ref().map(|u| u.name.clone()).unwrap_or_default())}</h1>
        <dl class="user__fields">
            <dt>"Bio"</dt>
            <dd>{field(|u| u.bio.clone())}</dd>
            <dt>"Website"</dt>
            <dd>{field(|u| u.website.clone())}</dd>
            <dt>"Zipcode"</dt>
            <dd>{field(|u| u.zipcode.clone())}</dd>
        </dl>
    }
}
