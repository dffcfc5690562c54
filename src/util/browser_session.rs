//! Browser-backed implementations of the session gate seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`BrowserAuth`] answers validity checks by sending the stored JWT to the
//! management endpoint; [`BrowserScheduler`] drives the poll loop with
//! `gloo-timers`. Outside the browser both degrade to inert stand-ins so the
//! SSR render never touches storage or timers.
//!
//! Any failure while checking (no token, transport error, malformed
//! response) reports the session as invalid.

#[cfg(test)]
#[path = "browser_session_test.rs"]
mod browser_session_test;

use std::time::Duration;

use crate::config::ConsoleConfig;
use crate::state::session::{IntervalHandle, IntervalScheduler, SessionAuth, TickFn, ValidityCallback};
use crate::util::credential;

/// Session collaborator backed by `localStorage` and the GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct BrowserAuth {
    config: ConsoleConfig,
}

impl BrowserAuth {
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }
}

impl SessionAuth for BrowserAuth {
    fn is_session_valid(&self, done: ValidityCallback) {
        let token = credential::load_token(&self.config.token_storage_key);
        let Some(token) = token else {
            done(false);
            return;
        };

        #[cfg(feature = "browser")]
        {
            let config = self.config.clone();
            leptos::task::spawn_local(async move {
                let valid = match crate::net::api::check_token(&config, &token).await {
                    Ok(valid) => valid,
                    Err(e) => {
                        log::warn!("session check failed: {e}");
                        false
                    }
                };
                done(valid);
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = token;
            done(false);
        }
    }

    fn delete_credential(&self) {
        credential::delete_token(&self.config.token_storage_key);
    }
}

/// Interval scheduler running on the browser event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl IntervalScheduler for BrowserScheduler {
    fn every(&self, period: Duration, tick: TickFn) -> IntervalHandle {
        let handle = IntervalHandle::new();

        #[cfg(feature = "browser")]
        {
            let armed = handle.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(period).await;
                    if !armed.is_armed() {
                        break;
                    }
                    tick();
                }
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (period, tick);
        }

        handle
    }
}
