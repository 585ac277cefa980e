//! Type definitions for portal_auth
//!
//! Contains the shared error types and configuration models used throughout
//! the app.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Application startup errors
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Server binding error: {0}")]
    ServerBind(String),
}

/// Runtime API errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl ApiError {
    pub fn config(message: impl Into<String>) -> Self {
        ApiError::Config {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
        }
    }
}

/// Complete app configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the external backend (`NEXT_PUBLIC_URL`)
    pub backend_url: String,
    /// Public base URL of this front end (`NEXTAUTH_URL`)
    pub app_url: String,
    /// Session token signing key (`NEXTAUTH_SECRET`)
    pub secret: String,
    /// Link target shown after sign-in (`NEXT_PUBLIC_CHAT_URL`)
    pub chat_url: String,
    pub server: ServerConfig,
    pub cors_origins: Vec<String>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Zero keeps the actix default (one worker per core)
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            workers: 0,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Config {
                ..
            } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Backend(_) => StatusCode::BAD_GATEWAY,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal {
                ..
            } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "status": self.status_code().as_u16(),
            "message": self.to_string(),
        }))
    }
}
