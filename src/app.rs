//! Root application component: session gate, contexts, and shell switch.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session gate for its whole lifetime. While the session is
//! valid it renders the menu and the routed pages; otherwise the login page.
//! The gate is started from an effect, after the first render, so the
//! initial markup is always the optimistic shell in both CSR and hydrate
//! builds.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::{menu::Menu, page_outlet::PageOutlet};
use crate::config::ConsoleConfig;
use crate::pages::login::LoginPage;
use crate::routes::PAGES;
use crate::state::session::{CheckHandle, SessionAuth, SessionContext, SessionGate, SessionState};
use crate::util::browser_session::{BrowserAuth, BrowserScheduler};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides `ConsoleConfig`, `RwSignal<SessionState>`, and `SessionContext`
/// to child components.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ConsoleConfig::from_build_env();
    let session = RwSignal::new(SessionState::default());
    let handle = CheckHandle::default();
    let auth: Arc<dyn SessionAuth> = Arc::new(BrowserAuth::new(config.clone()));

    let gate = SessionGate::new(Arc::clone(&auth), Arc::new(BrowserScheduler), handle.clone(), move |state| {
        session.set(state);
    })
    .with_period(config.session_poll_period);

    let context = SessionContext::new(auth, handle);
    provide_context(config);
    provide_context(session);
    provide_context(context.clone());

    // The first check must run after hydration: with no stored token it
    // resolves synchronously and would flip the shell before it renders.
    // Effects never run during SSR, so the server keeps the optimistic shell.
    let starter = gate.clone();
    Effect::new(move || starter.start());
    on_cleanup(move || gate.stop());

    let on_login = Callback::new(move |()| context.recheck());

    view! {
        <Stylesheet id="leptos" href="/pkg/management-ui.css"/>
        <Title text="Management Console"/>

        <Router>
            <Show
                when=move || session.get().valid
                fallback=move || view! { <LoginPage on_login/> }
            >
                <Menu pages=PAGES/>
                <main class="console-page">
                    <PageOutlet pages=PAGES/>
                </main>
            </Show>
        </Router>
    }
}
