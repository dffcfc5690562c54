//! Login page: email + password exchanged for a session JWT.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `App` in place of the whole shell while the session is
//! invalid. On success the token is stored and `on_login` asks the session
//! gate to re-check, which swaps the shell back in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::ConsoleConfig;

/// Trim the email and require both fields.
fn validate_login_input(email: &str, pass: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || pass.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), pass.to_owned()))
}

#[cfg(any(test, feature = "browser"))]
fn login_failed_message(err: &crate::net::error::ApiError) -> String {
    format!("Login failed: {err}")
}

#[component]
pub fn LoginPage(on_login: Callback<()>) -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let email = RwSignal::new(String::new());
    let pass = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, pass_value) = match validate_login_input(&email.get(), &pass.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "browser")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login_user(&config, &email_value, &pass_value).await {
                    Ok(token) => {
                        crate::util::credential::store_token(&config.token_storage_key, &token);
                        pass.set(String::new());
                        info.set(String::new());
                        on_login.run(());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        info.set(login_failed_message(&e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (&config, email_value, pass_value, &on_login);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Management Console"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || pass.get()
                        on:input=move |ev| pass.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
