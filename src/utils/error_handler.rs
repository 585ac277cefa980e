//! API Error Handler
//!
//! Converts `ApiError` instances into HTTP responses with the right status
//! code and a user-facing title. Backend details are kept out of
//! browser pages and only logged.

use crate::types::ApiError;
use crate::utils::response_handler::ResponseHandler;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

/// Error handler for API responses
pub struct ApiErrorHandler;

impl ApiErrorHandler {
    /// Get user-friendly error title
    pub fn get_error_title(error: &ApiError) -> &'static str {
        match error {
            ApiError::Config {
                ..
            } => "Configuration Error",
            ApiError::Backend(_) => "Service Unavailable",
            ApiError::Validation(_) => "Validation Error",
            ApiError::Internal {
                ..
            } => "Internal Server Error",
        }
    }

    /// Message safe to show to the user
    pub fn get_public_message(error: &ApiError) -> String {
        match error {
            ApiError::Validation(message) => message.clone(),
            ApiError::Backend(_) => "Something went wrong. Please try again later.".to_string(),
            ApiError::Config {
                ..
            }
            | ApiError::Internal {
                ..
            } => "An unexpected error occurred.".to_string(),
        }
    }

    /// Create a hybrid response (JSON for API clients, HTML for browsers)
    pub fn create_hybrid_response(error: &ApiError, req: &HttpRequest) -> HttpResponse {
        log::error!("{} {}: {}", req.method(), req.path(), error);

        ResponseHandler::create_hybrid_response(
            req,
            error.status_code(),
            Self::get_error_title(error),
            &Self::get_public_message(error),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[::core::prelude::v1::test]
    fn test_get_error_title() {
        assert_eq!(ApiErrorHandler::get_error_title(&ApiError::Backend("x".into())), "Service Unavailable");
        assert_eq!(ApiErrorHandler::get_error_title(&ApiError::internal("x")), "Internal Server Error");
        assert_eq!(ApiErrorHandler::get_error_title(&ApiError::Validation("x".into())), "Validation Error");
    }

    #[::core::prelude::v1::test]
    fn test_public_message_hides_backend_detail() {
        let error = ApiError::Backend("connect error: 10.0.0.7:8080 refused".into());
        assert!(!ApiErrorHandler::get_public_message(&error).contains("10.0.0.7"));

        let error = ApiError::Validation("Age must be a whole number".into());
        assert_eq!(ApiErrorHandler::get_public_message(&error), "Age must be a whole number");
    }

    #[actix_web::test]
    async fn test_create_hybrid_response() {
        let req = test::TestRequest::default()
            .insert_header(("Accept", "application/json"))
            .to_http_request();

        let response = ApiErrorHandler::create_hybrid_response(&ApiError::Backend("down".into()), &req);
        assert_eq!(response.status(), 502);
    }
}
