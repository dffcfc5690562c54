//! Console configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console runs entirely in the browser (a static `csr` bundle or a
//! hydrated SSR page), so settings are baked in from `TRAVELR_*`
//! environment variables when the crate is compiled. Parsing is
//! kept pure so it can be exercised without a browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "/graphql";
pub const DEFAULT_SESSION_POLL_MS: u64 = 5000;
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "jwt";

/// Errors produced while parsing console configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A string setting was present but blank.
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
    /// A numeric setting could not be parsed.
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// URL of the management GraphQL endpoint.
    pub graphql_endpoint: String,
    /// Interval between background session validity checks.
    pub session_poll_period: Duration,
    /// `localStorage` key holding the session JWT.
    pub token_storage_key: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_owned(),
            session_poll_period: Duration::from_millis(DEFAULT_SESSION_POLL_MS),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
        }
    }
}

impl ConsoleConfig {
    /// Build config from the environment captured at compile time.
    ///
    /// Optional:
    /// - `TRAVELR_GRAPHQL_URL`: default `/graphql`
    /// - `TRAVELR_SESSION_POLL_MS`: default 5000
    /// - `TRAVELR_TOKEN_STORAGE_KEY`: default `jwt`
    ///
    /// Invalid values are logged and replaced by the defaults.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TRAVELR_GRAPHQL_URL"),
            option_env!("TRAVELR_SESSION_POLL_MS"),
            option_env!("TRAVELR_TOKEN_STORAGE_KEY"),
        )
        .unwrap_or_else(|e| {
            log::warn!("invalid console config, using defaults: {e}");
            Self::default()
        })
    }

    /// Build typed config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a provided value is blank or a poll period
    /// is not a positive integer.
    pub fn from_values(
        graphql_endpoint: Option<&str>,
        session_poll_ms: Option<&str>,
        token_storage_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let graphql_endpoint = non_empty("TRAVELR_GRAPHQL_URL", graphql_endpoint, DEFAULT_GRAPHQL_ENDPOINT)?
            .trim_end_matches('/')
            .to_owned();
        let session_poll_period = parse_poll_period(session_poll_ms)?;
        let token_storage_key =
            non_empty("TRAVELR_TOKEN_STORAGE_KEY", token_storage_key, DEFAULT_TOKEN_STORAGE_KEY)?.to_owned();

        Ok(Self { graphql_endpoint, session_poll_period, token_storage_key })
    }
}

fn non_empty<'a>(var: &'static str, raw: Option<&'a str>, default: &'a str) -> Result<&'a str, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(default),
        Some("") => Err(ConfigError::Empty { var }),
        Some(value) => Ok(value),
    }
}

fn parse_poll_period(raw: Option<&str>) -> Result<Duration, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_millis(DEFAULT_SESSION_POLL_MS));
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidNumber { var: "TRAVELR_SESSION_POLL_MS", value: raw.to_owned() }),
    }
}
