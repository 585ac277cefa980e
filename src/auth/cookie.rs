//! Session cookie settings
//!
//! The session cookie is scoped to the parent domain of the app URL so every
//! subdomain (this front end, the chat service, ...) sees the same session.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use reqwest::Url;

use crate::auth::jwt::SESSION_MAX_AGE_DAYS;

pub const SECURE_COOKIE_NAME: &str = "__Secure-next-auth.session-token";
pub const COOKIE_NAME: &str = "next-auth.session-token";

/// Derive the `Domain` attribute for the session cookie from a base URL.
///
/// `localhost`, single-label hosts and IP literals are used as-is. A host with
/// exactly four labels keeps its last three, anything else its last two,
/// prefixed with a dot: `https://beta.example.com` gives `.example.com`.
///
/// The cookie crate drops that leading dot when rendering `Set-Cookie`, so the
/// header carries `Domain=example.com`. Browsers scope both forms to the
/// domain and all its subdomains.
pub fn cookie_domain(base_url: &str) -> Option<String> {
    let url = Url::parse(base_url).ok()?;
    let host_str = url.host_str()?;
    let Some(domain) = url.domain() else {
        // IP literal
        return Some(host_str.trim_matches(['[', ']']).to_string());
    };
    let host = domain.trim_end_matches('.').to_ascii_lowercase();

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() < 2 {
        return Some(host);
    }

    let keep = if labels.len() == 4 { 3 } else { 2 };
    Some(format!(".{}", labels[labels.len() - keep..].join(".")))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CookieSettings {
    pub name: String,
    pub domain: Option<String>,
    pub path: String,
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
}

impl CookieSettings {
    /// Settings for an app served at `app_url`; `Secure` and the `__Secure-`
    /// prefix only apply over https.
    pub fn from_app_url(app_url: &str) -> Self {
        let secure = app_url.trim_start().to_ascii_lowercase().starts_with("https://");
        Self {
            name: if secure { SECURE_COOKIE_NAME } else { COOKIE_NAME }.to_string(),
            domain: cookie_domain(app_url),
            path: "/".to_string(),
            http_only: true,
            secure,
            same_site: SameSite::Lax,
        }
    }

    fn base(&self, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.name.clone(), value)
            .path(self.path.clone())
            .http_only(self.http_only)
            .secure(self.secure)
            .same_site(self.same_site)
            .finish();
        if let Some(domain) = &self.domain {
            cookie.set_domain(domain.clone());
        }
        cookie
    }

    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        let mut cookie = self.base(token);
        cookie.set_max_age(Duration::days(SESSION_MAX_AGE_DAYS));
        cookie
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.set_max_age(Duration::ZERO);
        cookie
    }
}
