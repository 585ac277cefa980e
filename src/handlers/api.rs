//! JSON session endpoint for sibling apps on other subdomains

use actix_web::HttpResponse;
use serde_json::json;

use crate::auth::Session;

/// GET /api/auth/session
///
/// `{user, expires}` for a valid session, `{}` otherwise.
pub async fn session(session: Session) -> HttpResponse {
    let body = match (session.status.user(), session.expires) {
        (Some(user), expires) => json!({
            "user": user,
            "expires": expires.map(|e| e.to_rfc3339()),
        }),
        (None, _) => json!({}),
    };

    HttpResponse::Ok().insert_header(("Cache-Control", "no-store")).json(body)
}
