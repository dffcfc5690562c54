//! Console landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::config::ConsoleConfig;
use crate::net::types::User;

/// Landing page greeting the signed-in user.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let user = RwSignal::new(None::<User>);

    #[cfg(feature = "browser")]
    {
        if let Some(token) = crate::util::credential::load_token(&config.token_storage_key) {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_self(&config, &token).await {
                    Ok(found) => user.set(found),
                    Err(e) => log::warn!("failed to load current user: {e}"),
                }
            });
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = config;
    }

    view! {
        <div class="home-page">
            <h1>"Management Console"</h1>
            <p class="home-page__greeting">{move || greeting(user.get().as_ref())}</p>
        </div>
    }
}

fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Signed in as {} ({})", user.name, user.email),
        None => "Welcome".to_owned(),
    }
}
