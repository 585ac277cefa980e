//! Health check handlers
//!
//! # Endpoints
//! - `/health` - Basic health status
//! - `/health/live` - Liveness probe for orchestration

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;
use crate::{SERVICE_NAME, VERSION};

/// Service status enumeration
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: ServiceStatus,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the app state was built
    pub uptime: u64,
}

impl HealthStatus {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            status: ServiceStatus::Healthy,
            service: SERVICE_NAME.to_string(),
            version: VERSION.to_string(),
            timestamp: now,
            uptime: (now - started_at).num_seconds().max(0) as u64,
        }
    }
}

/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus::new(state.started_at))
}

/// GET /health/live
pub async fn liveness_probe() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "alive": true,
        "timestamp": Utc::now().to_rfc3339(),
        "pid": std::process::id(),
    }))
}
