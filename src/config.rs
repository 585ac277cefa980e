//! Configuration management for portal_auth
//!
//! Loads the app configuration from environment variables (a `.env` file is
//! picked up by `main` through dotenvy) and validates it before the server
//! starts.

use crate::types::{ApiError, AppConfig, ServerConfig};
use reqwest::Url;
use std::env;

/// Load complete app configuration
pub fn load_config() -> Result<AppConfig, ApiError> {
    let chat_url = required("NEXT_PUBLIC_CHAT_URL")?;
    let cors_origins = load_cors_origins(&chat_url);

    let config = AppConfig {
        backend_url: required("NEXT_PUBLIC_URL")?.trim_end_matches('/').to_string(),
        app_url: required("NEXTAUTH_URL")?,
        secret: required("NEXTAUTH_SECRET")?,
        chat_url,
        server: load_server_config(),
        cors_origins,
    };

    validate_config(&config)?;
    Ok(config)
}

fn required(name: &str) -> Result<String, ApiError> {
    env::var(name).map_err(|_| ApiError::config(format!("{name} must be set")))
}

/// Load server configuration
fn load_server_config() -> ServerConfig {
    let defaults = ServerConfig::default();
    ServerConfig {
        host: env::var("SERVER_HOST").unwrap_or(defaults.host),
        port: env::var("SERVER_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(defaults.port),
        workers: env::var("SERVER_WORKERS")
            .ok()
            .and_then(|w| w.parse().ok())
            .unwrap_or(defaults.workers),
    }
}

/// Comma separated `CORS_ORIGINS`, falling back to the chat service origin
fn load_cors_origins(chat_url: &str) -> Vec<String> {
    match env::var("CORS_ORIGINS") {
        Ok(raw) => raw.split(',').map(str::trim).filter(|o| !o.is_empty()).map(String::from).collect(),
        Err(_) => origin_of(chat_url).into_iter().collect(),
    }
}

/// `scheme://host[:port]` of an absolute URL
pub fn origin_of(url: &str) -> Option<String> {
    Url::parse(url).ok().map(|u| u.origin().ascii_serialization()).filter(|o| o != "null")
}

fn validate_url(name: &str, value: &str) -> Result<(), ApiError> {
    let url = Url::parse(value).map_err(|e| ApiError::config(format!("{name} is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(()),
        _ => Err(ApiError::config(format!("{name} must be an absolute http(s) URL"))),
    }
}

pub fn validate_config(config: &AppConfig) -> Result<(), ApiError> {
    validate_url("NEXT_PUBLIC_URL", &config.backend_url)?;
    validate_url("NEXTAUTH_URL", &config.app_url)?;
    validate_url("NEXT_PUBLIC_CHAT_URL", &config.chat_url)?;

    if config.secret.trim().is_empty() {
        return Err(ApiError::config("NEXTAUTH_SECRET can't be empty"));
    }

    for origin in &config.cors_origins {
        if origin_of(origin).is_none() {
            return Err(ApiError::config(format!("Invalid CORS origin: {origin}")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AppConfig {
        AppConfig {
            backend_url: "https://api.example.com".to_string(),
            app_url: "https://beta.example.com".to_string(),
            secret: "s3cret".to_string(),
            chat_url: "https://chat.example.com/rooms".to_string(),
            server: ServerConfig::default(),
            cors_origins: vec!["https://chat.example.com".to_string()],
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&sample()).is_ok());
    }

    #[test]
    fn test_empty_secret_rejected() {
        let mut config = sample();
        config.secret = "  ".to_string();
        assert!(matches!(validate_config(&config), Err(ApiError::Config { .. })));
    }

    #[test]
    fn test_relative_url_rejected() {
        let mut config = sample();
        config.app_url = "/auth".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = sample();
        config.backend_url = "ftp://files.example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_origin_of() {
        assert_eq!(
            origin_of("https://chat.example.com/rooms?x=1").as_deref(),
            Some("https://chat.example.com")
        );
        assert_eq!(origin_of("http://localhost:4000/").as_deref(), Some("http://localhost:4000"));
        assert_eq!(origin_of("not a url"), None);
    }
}
