//! Shared application state handed to every handler through `web::Data`

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::auth::{AuthBackend, CookieSettings, HttpBackend, JwtService};
use crate::types::AppConfig;

pub struct AppState {
    pub backend: Arc<dyn AuthBackend>,
    pub jwt: JwtService,
    pub cookies: CookieSettings,
    pub chat_url: String,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: &AppConfig, backend: Arc<dyn AuthBackend>) -> Self {
        Self {
            backend,
            jwt: JwtService::new(&config.secret),
            cookies: CookieSettings::from_app_url(&config.app_url),
            chat_url: config.chat_url.clone(),
            started_at: Utc::now(),
        }
    }

    /// State talking to the configured backend over HTTP
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config, Arc::new(HttpBackend::new(config.backend_url.clone())))
    }
}
