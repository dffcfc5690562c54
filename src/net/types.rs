//! GraphQL wire types for the management endpoint.
//!
//! DESIGN
//! ======
//! Field names follow the server schema (`ID`, `loginUser`, `self`) through
//! serde renames so the Rust side keeps snake_case names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A console user as returned by `auth(token) { self { ... } }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Standard GraphQL response envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// First reported error message, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// `data` payload of the login mutation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginData {
    #[serde(rename = "loginUser")]
    pub login_user: Option<String>,
}

/// `data` payload of the authenticated `self` query.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SelfData {
    pub auth: Option<AuthenticatedData>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthenticatedData {
    #[serde(rename = "self")]
    pub current: Option<User>,
}
