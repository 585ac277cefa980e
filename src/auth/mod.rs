//! Authentication module
//!
//! This module provides:
//! - the credential relay to the external backend
//! - session token signing and verification
//! - the cross-subdomain session cookie
//! - session resolution for page handlers

pub mod cookie;
pub mod dto;
pub mod jwt;
pub mod relay;
pub mod session;

// Re-export commonly used types
pub use cookie::{cookie_domain, CookieSettings};
pub use dto::*;
pub use jwt::{JwtService, SessionClaims};
pub use relay::{AuthBackend, HttpBackend};
pub use session::{redirect_for, resolve_session, Page, Session, SessionStatus};

use thiserror::Error;

use crate::types::ApiError;

/// Session token errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Failed to create a session token: {0}")]
    TokenCreation(String),
}

// Invalid or expired cookies resolve to an unauthenticated session, so the
// only token error that reaches a response is a failure to sign one.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_token_creation_failure_is_internal() {
        let error = ApiError::from(AuthError::TokenCreation("bad key".into()));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.to_string().contains("bad key"));
    }
}
