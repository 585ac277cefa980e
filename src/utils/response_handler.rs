//! HTTP Response Handler
//!
//! Builds the responses shared by every handler:
//! - `303 See Other` redirects for the post/redirect/get flow of the forms
//! - HTML pages
//! - hybrid error responses: JSON for API clients, a styled HTML page for
//!   browsers

use actix_web::http::header::{self, ACCEPT};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder};
use chrono::Utc;
use serde_json::json;

use crate::pages::escape_html;

pub struct ResponseHandler;

impl ResponseHandler {
    /// Redirect after a form post (or a gated page) to `location`
    pub fn see_other(location: &str) -> HttpResponseBuilder {
        let mut builder = HttpResponse::SeeOther();
        builder.insert_header((header::LOCATION, location.to_string()));
        builder
    }

    /// A rendered HTML page with the given status
    pub fn html(status: StatusCode, body: String) -> HttpResponse {
        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .body(body)
    }

    /// Whether the caller wants JSON rather than a page
    ///
    /// Checks the Accept header for "application/json" and the X-Requested-With
    /// header of AJAX requests. Defaults to HTML for browsers.
    pub fn wants_json(req: &HttpRequest) -> bool {
        let accept = req.headers().get(ACCEPT).and_then(|h| h.to_str().ok()).unwrap_or("");
        accept.contains("application/json") || req.headers().get("X-Requested-With").is_some()
    }

    /// Create a hybrid response that adapts to the client type
    pub fn create_hybrid_response(
        req: &HttpRequest,
        status: StatusCode,
        title: &str,
        description: &str,
    ) -> HttpResponse {
        if Self::wants_json(req) {
            Self::create_json_response(req, status, title, description)
        } else {
            Self::create_html_response(req, status, title, description)
        }
    }

    fn create_json_response(
        req: &HttpRequest,
        status: StatusCode,
        title: &str,
        description: &str,
    ) -> HttpResponse {
        HttpResponse::build(status).json(json!({
            "status": status.as_u16(),
            "title": title,
            "message": description,
            "path": req.uri().path(),
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }

    fn create_html_response(
        req: &HttpRequest,
        status: StatusCode,
        title: &str,
        description: &str,
    ) -> HttpResponse {
        let code = status.as_u16();
        let html_content = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Error {code} - {title}</title>
<style>
    body {{ margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #111827; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }}
    .error-container {{ background: white; border-radius: 16px; padding: 48px 40px; max-width: 560px; text-align: center; margin: 20px; }}
    .error-code {{ font-size: 4rem; font-weight: 700; color: {color}; }}
    .error-title {{ font-size: 1.75rem; color: #2c3e50; margin: 16px 0; font-weight: 600; }}
    .error-description {{ color: #7f8c8d; line-height: 1.6; margin-bottom: 32px; }}
    .error-details {{ color: #5a6c7d; font-size: .875rem; margin-bottom: 32px; }}
    .btn {{ display: inline-block; background: #6366f1; color: white; padding: 10px 28px; border-radius: 6px; text-decoration: none; font-weight: 600; }}
</style>
</head>
<body>
<div class="error-container">
<div class="error-code">{code}</div>
<div class="error-title">{title}</div>
<div class="error-description">{description}</div>
<div class="error-details">{family} &middot; {path} &middot; {timestamp}</div>
<a href="/" class="btn">&larr; Back to sign in</a>
</div>
</body>
</html>"#,
            title = escape_html(title),
            description = escape_html(description),
            color = Self::get_error_color(code),
            family = Self::get_status_family(code),
            path = escape_html(req.uri().path()),
            timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        );

        Self::html(status, html_content)
    }

    /// Colour-code error pages by status range
    fn get_error_color(code: u16) -> &'static str {
        match code {
            400..=499 => "#e74c3c",
            500..=599 => "#8e44ad",
            _ => "#95a5a6",
        }
    }

    fn get_status_family(code: u16) -> &'static str {
        match code {
            100..=199 => "1xx Informational",
            200..=299 => "2xx Success",
            300..=399 => "3xx Redirection",
            400..=499 => "4xx Client Error",
            500..=599 => "5xx Server Error",
            _ => "Unknown Status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn test_client_detection_json() {
        let req = test::TestRequest::default()
            .insert_header(("Accept", "application/json"))
            .to_http_request();

        let response =
            ResponseHandler::create_hybrid_response(&req, StatusCode::BAD_GATEWAY, "Backend", "down");

        assert_eq!(response.status(), 502);
        assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    }

    #[actix_web::test]
    async fn test_client_detection_html() {
        let req = test::TestRequest::default().insert_header(("Accept", "text/html")).to_http_request();

        let response =
            ResponseHandler::create_hybrid_response(&req, StatusCode::NOT_FOUND, "Missing", "gone");

        assert_eq!(response.status(), 404);
        assert_eq!(response.headers().get("content-type").unwrap(), "text/html; charset=utf-8");
    }

    #[actix_web::test]
    async fn test_ajax_detection() {
        let req = test::TestRequest::default()
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .to_http_request();

        assert!(ResponseHandler::wants_json(&req));
    }

    #[actix_web::test]
    async fn test_see_other_sets_location() {
        let response = ResponseHandler::see_other("/auth").finish();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/auth");
    }

    #[::core::prelude::v1::test]
    fn test_status_families() {
        assert_eq!(ResponseHandler::get_status_family(200), "2xx Success");
        assert_eq!(ResponseHandler::get_status_family(404), "4xx Client Error");
        assert_eq!(ResponseHandler::get_status_family(500), "5xx Server Error");
        assert_eq!(ResponseHandler::get_status_family(999), "Unknown Status");
        assert_eq!(ResponseHandler::get_error_color(502), "#8e44ad");
    }
}
