//! Session-gated pages: `/` (sign-in) and `/auth` (landing)

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::auth::{Page, Session, SessionStatus};
use crate::handlers::PageQuery;
use crate::pages::{landing_page, loading_page, sign_in_page, SignInView, SignUpModal};
use crate::state::AppState;
use crate::utils::response_handler::ResponseHandler;

/// GET /
pub async fn sign_in(session: Session, query: web::Query<PageQuery>) -> HttpResponse {
    if let Some(location) = session.redirect_for(Page::SignIn) {
        return ResponseHandler::see_other(location).finish();
    }
    if session.status == SessionStatus::Loading {
        return ResponseHandler::html(StatusCode::OK, loading_page());
    }

    let view = SignInView {
        toast: query.toast(),
        signup: SignUpModal {
            open: query.signup_open(),
            ..Default::default()
        },
        ..Default::default()
    };
    ResponseHandler::html(StatusCode::OK, sign_in_page(&view))
}

/// GET /auth
pub async fn landing(
    session: Session,
    query: web::Query<PageQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    if let Some(location) = session.redirect_for(Page::Landing) {
        return ResponseHandler::see_other(location).finish();
    }

    match session.status.user() {
        Some(user) => ResponseHandler::html(StatusCode::OK, landing_page(user, &state.chat_url, query.toast())),
        None => ResponseHandler::html(StatusCode::OK, loading_page()),
    }
}
