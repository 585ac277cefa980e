//! Data Transfer Objects (DTOs) for the authentication module
//!
//! Contains the form inputs, the payloads exchanged with the external backend
//! and the user profile embedded in session tokens.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::types::ApiError;

/// Account status sent with every sign-up; the backend activates it later
pub const PENDING_STATUS: &str = "Pending";

/// Username/password pair submitted by the sign-in form
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<hidden>")
            .finish()
    }
}

/// Key of the backend's password hash inside the user payload
const PASSWORD_FIELD: &str = "password";

/// User profile as returned by the backend's `/auth/login`
///
/// Owned by the backend and kept as the JSON it sent: any shape of `id` or
/// timestamps is accepted. Only the password is dropped when the profile is
/// serialized, so it never reaches a session token or the session endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct User(Value);

impl From<Value> for User {
    fn from(value: Value) -> Self {
        User(value)
    }
}

impl User {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String or number field rendered as text
    fn text(&self, key: &str) -> Option<String> {
        match self.field(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    pub fn username(&self) -> Option<String> {
        self.text("username")
    }

    /// Token subject: the id, else the username
    pub fn subject(&self) -> String {
        self.id().or_else(|| self.username()).unwrap_or_default()
    }

    pub fn display_name(&self) -> String {
        let full = [self.text("firstName"), self.text("lastName")]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.username().unwrap_or_default()
        } else {
            full
        }
    }
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Value::Object(fields) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in fields.iter().filter(|(key, _)| key.as_str() != PASSWORD_FIELD) {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            },
            other => other.serialize(serializer),
        }
    }
}

/// Fields of the sign-up modal, exactly as the browser posts them
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub age: String,
    pub address: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for SignUpForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpForm")
            .field("username", &self.username)
            .field("password", &"<hidden>")
            .finish_non_exhaustive()
    }
}

/// Body posted to the backend's `/users/create`
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub address: String,
    pub password: String,
    pub status: String,
    pub age: i64,
}

impl TryFrom<SignUpForm> for NewUser {
    type Error = ApiError;

    fn try_from(form: SignUpForm) -> Result<Self, Self::Error> {
        let age = form
            .age
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::Validation("Age must be a whole number".to_string()))?;

        Ok(NewUser {
            first_name: form.first_name,
            last_name: form.last_name,
            username: form.username,
            address: form.address,
            password: form.password,
            status: PENDING_STATUS.to_string(),
            age,
        })
    }
}

/// Response body of `/users/create`
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserResponse {
    #[serde(default)]
    pub error: Option<Value>,
}

impl CreateUserResponse {
    /// The backend's error, if it reported a truthy one
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Object(obj) => obj
                .get("message")
                .and_then(Value::as_str)
                .map(String::from)
                .or_else(|| Some(Value::Object(obj.clone()).to_string())),
            other => Some(other.to_string()),
        }
    }
}

/// Result of a sign-up relay
#[derive(Debug, Clone, PartialEq)]
pub enum CreateUserOutcome {
    Created,
    Rejected(String),
}
