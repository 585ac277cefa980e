//! Sign-up relay
//!
//! Accounts are created on the backend in `Pending` status; the user is not
//! signed in afterwards.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::auth::dto::{CreateUserOutcome, NewUser, SignUpForm};
use crate::auth::session::SIGN_IN_PATH;
use crate::handlers::with_toast;
use crate::pages::{sign_in_page, SignInView, SignUpModal, Toast};
use crate::state::AppState;
use crate::types::ApiError;
use crate::utils::error_handler::ApiErrorHandler;
use crate::utils::response_handler::ResponseHandler;

/// POST /signup
pub async fn sign_up(state: web::Data<AppState>, form: web::Form<SignUpForm>) -> HttpResponse {
    let form = form.into_inner();

    let new_user = match NewUser::try_from(form.clone()) {
        Ok(new_user) => new_user,
        Err(e) => return modal_with_error(StatusCode::UNPROCESSABLE_ENTITY, &form, &e),
    };

    match state.backend.create_user(&new_user).await {
        Ok(CreateUserOutcome::Created) => {
            ResponseHandler::see_other(&with_toast(SIGN_IN_PATH, Toast::UserCreated)).finish()
        },
        Ok(CreateUserOutcome::Rejected(message)) => {
            modal_with_message(StatusCode::UNPROCESSABLE_ENTITY, &form, &message)
        },
        Err(e) => {
            log::error!("Sign-up for '{}' failed: {}", form.username, e);
            modal_with_error(StatusCode::BAD_GATEWAY, &form, &e)
        },
    }
}

fn modal_with_error(status: StatusCode, form: &SignUpForm, error: &ApiError) -> HttpResponse {
    modal_with_message(status, form, &ApiErrorHandler::get_public_message(error))
}

/// Re-render the sign-in page with the modal still open
fn modal_with_message(status: StatusCode, form: &SignUpForm, message: &str) -> HttpResponse {
    let view = SignInView {
        toast: Some(Toast::Error),
        signup: SignUpModal {
            open: true,
            error: Some(message),
            values: Some(form),
        },
        ..Default::default()
    };
    ResponseHandler::html(status, sign_in_page(&view))
}
