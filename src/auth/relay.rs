//! Credential relay to the external backend
//!
//! Sign-in and sign-up are never decided here: both are forwarded to the
//! backend over plain HTTP and only the outcome is interpreted.

use async_trait::async_trait;
use reqwest::Client;

use crate::auth::dto::{CreateUserOutcome, CreateUserResponse, Credentials, NewUser, User};
use crate::types::ApiError;

pub const LOGIN_PATH: &str = "/auth/login";
pub const CREATE_USER_PATH: &str = "/users/create";

/// Operations the front end needs from the backend
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Returns the user on success and `None` on any failure. Callers can't
    /// tell a wrong password from an unreachable backend.
    async fn authorize(&self, credentials: &Credentials) -> Option<User>;

    async fn create_user(&self, user: &NewUser) -> Result<CreateUserOutcome, ApiError>;
}

/// `AuthBackend` over HTTP with a shared connection pool
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AuthBackend for HttpBackend {
    async fn authorize(&self, credentials: &Credentials) -> Option<User> {
        let response = match self.client.post(self.endpoint(LOGIN_PATH)).json(credentials).send().await
        {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Login relay for '{}' failed: {}", credentials.username, e);
                return None;
            },
        };

        let status = response.status();
        if !status.is_success() {
            log::debug!("Backend rejected login for '{}' with {}", credentials.username, status);
            return None;
        }

        match response.json::<User>().await {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Backend returned an unreadable user for '{}': {}", credentials.username, e);
                None
            },
        }
    }

    async fn create_user(&self, user: &NewUser) -> Result<CreateUserOutcome, ApiError> {
        let response = self
            .client
            .post(self.endpoint(CREATE_USER_PATH))
            .json(user)
            .send()
            .await
            .map_err(|e| ApiError::Backend(format!("Sign-up relay failed: {e}")))?;

        let status = response.status();
        let body = response
            .json::<CreateUserResponse>()
            .await
            .map_err(|e| ApiError::Backend(format!("Unreadable sign-up response ({status}): {e}")))?;

        match body.error_message() {
            Some(message) => {
                log::debug!("Backend rejected sign-up for '{}': {}", user.username, message);
                Ok(CreateUserOutcome::Rejected(message))
            },
            None => {
                log::info!("Created pending account '{}'", user.username);
                Ok(CreateUserOutcome::Created)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let backend = HttpBackend::new("https://api.example.com/");
        assert_eq!(backend.endpoint(LOGIN_PATH), "https://api.example.com/auth/login");
        assert_eq!(backend.endpoint(CREATE_USER_PATH), "https://api.example.com/users/create");
    }
}
