//! Logout route: sends the user back to `/` and drops the session.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;

/// Replace the location with `/` first, then log out.
///
/// Logging out can flip the session synchronously, which disposes this page,
/// so navigation has to happen while the page is still mounted.
fn sign_out<F>(session: &SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
    session.logout();
}

/// Deletes the stored credential and forces a session re-check. The location
/// is replaced with `/` so the next login does not land on this route again.
#[component]
pub fn LogoutPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    Effect::new(move || sign_out(&session, &navigate));

    view! { <p class="logout-page">"Signing out..."</p> }
}
