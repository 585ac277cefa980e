//! Session resolution for page handlers
//!
//! Each page receives the resolved session explicitly through the [`Session`]
//! extractor and decides what to render or where to redirect with
//! [`redirect_for`].

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use chrono::{DateTime, Utc};
use futures_util::future::{ready, Ready};

use crate::auth::cookie::CookieSettings;
use crate::auth::dto::User;
use crate::auth::jwt::{JwtService, SessionClaims};
use crate::auth::AuthError;
use crate::state::AppState;
use crate::types::ApiError;

pub const SIGN_IN_PATH: &str = "/";
pub const LANDING_PATH: &str = "/auth";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    /// Resolution still pending; render a placeholder and don't redirect
    Loading,
    Unauthenticated,
    Authenticated(User),
}

impl SessionStatus {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Pages gated on the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    SignIn,
    Landing,
}

/// Where `page` must send the browser for `status`, if anywhere
pub fn redirect_for(page: Page, status: &SessionStatus) -> Option<&'static str> {
    match (page, status) {
        (Page::Landing, SessionStatus::Unauthenticated) => Some(SIGN_IN_PATH),
        (Page::SignIn, SessionStatus::Authenticated(_)) => Some(LANDING_PATH),
        _ => None,
    }
}

/// Verify the session cookie on `req`, if any
pub fn resolve_claims(
    req: &HttpRequest,
    jwt: &JwtService,
    cookies: &CookieSettings,
) -> Option<SessionClaims> {
    let cookie = req.cookie(&cookies.name)?;
    if cookie.value().is_empty() {
        return None;
    }

    match jwt.verify(cookie.value()) {
        Ok(claims) => Some(claims),
        Err(AuthError::TokenExpired) => {
            log::debug!("Session cookie expired");
            None
        },
        Err(e) => {
            log::debug!("Ignoring session cookie: {}", e);
            None
        },
    }
}

pub fn resolve_session(req: &HttpRequest, jwt: &JwtService, cookies: &CookieSettings) -> SessionStatus {
    match resolve_claims(req, jwt, cookies) {
        Some(claims) => SessionStatus::Authenticated(claims.user),
        None => SessionStatus::Unauthenticated,
    }
}

/// The resolved session of the current request
#[derive(Debug, Clone)]
pub struct Session {
    pub status: SessionStatus,
    pub expires: Option<DateTime<Utc>>,
}

impl Session {
    pub fn redirect_for(&self, page: Page) -> Option<&'static str> {
        redirect_for(page, &self.status)
    }
}

impl FromRequest for Session {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            return ready(Err(ApiError::internal("Application state isn't configured")));
        };

        let session = match resolve_claims(req, &state.jwt, &state.cookies) {
            Some(claims) => Session {
                expires: claims.expires_at(),
                status: SessionStatus::Authenticated(claims.user),
            },
            None => Session {
                status: SessionStatus::Unauthenticated,
                expires: None,
            },
        };
        ready(Ok(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test;
    use chrono::Duration;
    use serde_json::json;

    fn user() -> User {
        User::from(json!({
            "id": 1,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "username": "ada"
        }))
    }

    #[::core::prelude::v1::test]
    fn test_redirect_policy() {
        let authed = SessionStatus::Authenticated(user());

        assert_eq!(redirect_for(Page::Landing, &SessionStatus::Unauthenticated), Some("/"));
        assert_eq!(redirect_for(Page::Landing, &authed), None);
        assert_eq!(redirect_for(Page::SignIn, &authed), Some("/auth"));
        assert_eq!(redirect_for(Page::SignIn, &SessionStatus::Unauthenticated), None);
        assert_eq!(redirect_for(Page::SignIn, &SessionStatus::Loading), None);
        assert_eq!(redirect_for(Page::Landing, &SessionStatus::Loading), None);
    }

    #[actix_web::test]
    async fn test_resolve_session_from_cookie() {
        let jwt = JwtService::new("secret");
        let settings = CookieSettings::from_app_url("http://localhost:3000");
        let token = jwt.issue(&user()).unwrap();

        let req = test::TestRequest::default()
            .cookie(Cookie::new(settings.name.clone(), token))
            .to_http_request();
        assert_eq!(resolve_session(&req, &jwt, &settings), SessionStatus::Authenticated(user()));

        let req = test::TestRequest::default().to_http_request();
        assert_eq!(resolve_session(&req, &jwt, &settings), SessionStatus::Unauthenticated);
    }

    #[actix_web::test]
    async fn test_expired_cookie_is_unauthenticated() {
        let jwt = JwtService::new("secret");
        let settings = CookieSettings::from_app_url("http://localhost:3000");
        let token = jwt.issue_at(&user(), Utc::now() - Duration::days(31)).unwrap();

        let req = test::TestRequest::default()
            .cookie(Cookie::new(settings.name.clone(), token))
            .to_http_request();
        assert_eq!(resolve_session(&req, &jwt, &settings), SessionStatus::Unauthenticated);
    }

    #[actix_web::test]
    async fn test_cookie_under_other_name_is_ignored() {
        let jwt = JwtService::new("secret");
        let settings = CookieSettings::from_app_url("https://beta.example.com");
        let token = jwt.issue(&user()).unwrap();

        let req = test::TestRequest::default()
            .cookie(Cookie::new("next-auth.session-token", token))
            .to_http_request();
        assert_eq!(resolve_session(&req, &jwt, &settings), SessionStatus::Unauthenticated);
    }
}
