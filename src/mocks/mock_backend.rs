//! Mock backend handlers
//!
//! Serves `/auth/login` and `/users/create` the way the real backend does,
//! from an in-memory user list. Seeded with `demo` / `demo123`.

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use std::sync::Mutex;

use crate::auth::dto::Credentials;
use crate::auth::relay::{CREATE_USER_PATH, LOGIN_PATH};

#[derive(Debug, Clone)]
struct MockUser {
    id: i64,
    first_name: String,
    last_name: String,
    username: String,
    age: i64,
    address: String,
    password: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl MockUser {
    fn to_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "firstName": self.first_name,
            "lastName": self.last_name,
            "username": self.username,
            "age": self.age,
            "address": self.address,
            "password": self.password,
            "status": self.status,
            "createdAt": self.created_at.to_rfc3339(),
            "updatedAt": self.created_at.to_rfc3339(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    first_name: String,
    last_name: String,
    username: String,
    age: i64,
    address: String,
    #[serde(default)]
    password: String,
    status: String,
}

/// Shared user list of the mock backend
#[derive(Debug, Default)]
pub struct MockBackend {
    users: Mutex<Vec<MockUser>>,
}

impl MockBackend {
    pub fn seeded() -> Self {
        let backend = Self::default();
        backend.insert("Demo", "User", "demo", 30, "Acme street 7", "demo123", "Active");
        backend
    }

    #[allow(clippy::too_many_arguments)]
    fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        username: &str,
        age: i64,
        address: &str,
        password: &str,
        status: &str,
    ) -> Option<MockUser> {
        let mut users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        if users.iter().any(|u| u.username == username) {
            return None;
        }

        let user = MockUser {
            id: users.len() as i64 + 1,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            username: username.to_string(),
            age,
            address: address.to_string(),
            password: password.to_string(),
            status: status.to_string(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Some(user)
    }

    fn find(&self, credentials: &Credentials) -> Option<MockUser> {
        let users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        users
            .iter()
            .find(|u| u.username == credentials.username && u.password == credentials.password)
            .cloned()
    }

    pub fn status_of(&self, username: &str) -> Option<String> {
        let users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        users.iter().find(|u| u.username == username).map(|u| u.status.clone())
    }
}

/// User authentication endpoint - returns the user on a match, 401 otherwise
pub async fn mock_login(
    backend: web::Data<MockBackend>,
    payload: web::Json<Credentials>,
) -> HttpResponse {
    match backend.find(&payload) {
        Some(user) => HttpResponse::Ok().json(user.to_json()),
        None => HttpResponse::Unauthorized().json(json!({
            "message": "Invalid credentials"
        })),
    }
}

/// User registration endpoint - reports problems in an `error` field
pub async fn mock_create_user(
    backend: web::Data<MockBackend>,
    payload: web::Json<CreateUserBody>,
) -> HttpResponse {
    let body = payload.into_inner();
    if body.username.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "Username is required" }));
    }

    match backend.insert(
        &body.first_name,
        &body.last_name,
        &body.username,
        body.age,
        &body.address,
        &body.password,
        &body.status,
    ) {
        Some(user) => HttpResponse::Created().json(json!({ "id": user.id, "status": user.status })),
        None => HttpResponse::Conflict().json(json!({ "error": "Username already exists" })),
    }
}

pub fn configure_mock_backend(cfg: &mut web::ServiceConfig) {
    cfg.route(LOGIN_PATH, web::post().to(mock_login))
        .route(CREATE_USER_PATH, web::post().to(mock_create_user));
}
