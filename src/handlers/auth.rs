//! Sign-in and sign-out
//!
//! Browsers post the forms and follow redirects; API clients (JSON `Accept`)
//! get a JSON body with the same outcome.

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::auth::dto::Credentials;
use crate::auth::session::{LANDING_PATH, SIGN_IN_PATH};
use crate::handlers::with_toast;
use crate::pages::{sign_in_page, SignInView, Toast, SIGN_IN_FAILED};
use crate::state::AppState;
use crate::types::ApiError;
use crate::utils::error_handler::ApiErrorHandler;
use crate::utils::response_handler::ResponseHandler;

/// POST /api/auth/callback/credentials
pub async fn sign_in_with_credentials(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<Credentials>,
) -> HttpResponse {
    let credentials = form.into_inner();

    let Some(user) = state.backend.authorize(&credentials).await else {
        log::info!("Sign-in failed for '{}'", credentials.username);
        return sign_in_failed(&req, &credentials.username);
    };

    let token = match state.jwt.issue(&user) {
        Ok(token) => token,
        Err(e) => return ApiErrorHandler::create_hybrid_response(&ApiError::from(e), &req),
    };
    log::info!("User '{}' signed in", credentials.username);

    let cookie = state.cookies.session_cookie(token);
    if ResponseHandler::wants_json(&req) {
        return HttpResponse::Ok().cookie(cookie).json(json!({
            "ok": true,
            "status": 200,
            "error": null,
            "url": LANDING_PATH,
        }));
    }
    ResponseHandler::see_other(&with_toast(LANDING_PATH, Toast::SignedIn)).cookie(cookie).finish()
}

fn sign_in_failed(req: &HttpRequest, username: &str) -> HttpResponse {
    if ResponseHandler::wants_json(req) {
        return HttpResponse::Unauthorized().json(json!({
            "ok": false,
            "status": 401,
            "error": SIGN_IN_FAILED,
            "url": null,
        }));
    }

    let view = SignInView {
        toast: Some(Toast::Error),
        error: Some(SIGN_IN_FAILED),
        username: Some(username),
        ..Default::default()
    };
    ResponseHandler::html(StatusCode::UNAUTHORIZED, sign_in_page(&view))
}

/// POST /api/auth/signout
pub async fn sign_out(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let cookie = state.cookies.removal_cookie();

    if ResponseHandler::wants_json(&req) {
        return HttpResponse::Ok().cookie(cookie).json(json!({ "url": SIGN_IN_PATH }));
    }
    ResponseHandler::see_other(&with_toast(SIGN_IN_PATH, Toast::SignedOut)).cookie(cookie).finish()
}
