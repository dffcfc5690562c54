//! GraphQL helpers for the management endpoint.
//!
//! Browser builds (`csr`/`hydrate`): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! console only talks to the endpoint from the browser.
//!
//! ERROR HANDLING
//! ==============
//! A GraphQL error on the `auth(token)` query means the token was rejected,
//! so [`fetch_self`] reports it as `Ok(None)`. Transport and decoding
//! failures stay `Err` so callers can log them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(any(test, feature = "browser"))]
use super::types::{GraphqlResponse, LoginData, SelfData};
use super::types::User;
use crate::config::ConsoleConfig;

#[cfg(any(test, feature = "browser"))]
const LOGIN_MUTATION: &str = "mutation LoginUser($email: String!, $pass: String!) { loginUser(email: $email, pass: $pass) }";

#[cfg(any(test, feature = "browser"))]
const SELF_QUERY: &str = "query Self($token: String!) { auth(token: $token) { self { ID email name } } }";

#[cfg(any(test, feature = "browser"))]
fn login_request_body(email: &str, pass: &str) -> serde_json::Value {
    serde_json::json!({
        "query": LOGIN_MUTATION,
        "variables": { "email": email, "pass": pass },
    })
}

#[cfg(any(test, feature = "browser"))]
fn self_request_body(token: &str) -> serde_json::Value {
    serde_json::json!({
        "query": SELF_QUERY,
        "variables": { "token": token },
    })
}

#[cfg(any(test, feature = "browser"))]
fn interpret_login(resp: GraphqlResponse<LoginData>) -> Result<String, ApiError> {
    if let Some(message) = resp.first_error() {
        return Err(ApiError::Graphql(message.to_owned()));
    }
    resp.data
        .and_then(|d| d.login_user)
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::MissingField("loginUser"))
}

#[cfg(any(test, feature = "browser"))]
fn interpret_self(resp: GraphqlResponse<SelfData>) -> Result<Option<User>, ApiError> {
    if let Some(message) = resp.first_error() {
        log::debug!("token rejected: {message}");
        return Ok(None);
    }
    let data = resp.data.ok_or(ApiError::MissingField("data"))?;
    Ok(data.auth.and_then(|a| a.current))
}

#[cfg(feature = "browser")]
async fn post_graphql<T: serde::de::DeserializeOwned>(
    endpoint: &str,
    body: &serde_json::Value,
) -> Result<GraphqlResponse<T>, ApiError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<GraphqlResponse<T>>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Exchange email and password for a session JWT via the `loginUser` mutation.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server rejects the
/// credentials, or no token comes back.
pub async fn login_user(config: &ConsoleConfig, email: &str, pass: &str) -> Result<String, ApiError> {
    #[cfg(feature = "browser")]
    {
        let resp = post_graphql::<LoginData>(&config.graphql_endpoint, &login_request_body(email, pass)).await?;
        interpret_login(resp)
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (config, email, pass);
        Err(ApiError::Unavailable)
    }
}

/// Resolve the user a token belongs to. `Ok(None)` means the token is not accepted.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or decoding failures.
pub async fn fetch_self(config: &ConsoleConfig, token: &str) -> Result<Option<User>, ApiError> {
    #[cfg(feature = "browser")]
    {
        let resp = post_graphql::<SelfData>(&config.graphql_endpoint, &self_request_body(token)).await?;
        interpret_self(resp)
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Whether the endpoint still accepts `token`.
///
/// # Errors
///
/// Same as [`fetch_self`].
pub async fn check_token(config: &ConsoleConfig, token: &str) -> Result<bool, ApiError> {
    fetch_self(config, token).await.map(|user| user.is_some())
}
