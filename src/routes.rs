//! Route table of the front end

use actix_cors::Cors;
use actix_web::web;

use crate::handlers::{api, auth, health, pages, signup};

/// CORS for the session endpoint: credentialed GETs from the configured
/// sibling origins only
pub fn session_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET"])
        .supports_credentials()
        .max_age(3600)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, cors_origins: &[String]) {
    cfg.route("/", web::get().to(pages::sign_in))
        .route("/auth", web::get().to(pages::landing))
        .route("/signup", web::post().to(signup::sign_up))
        .route("/api/auth/callback/credentials", web::post().to(auth::sign_in_with_credentials))
        .route("/api/auth/signout", web::post().to(auth::sign_out))
        .service(
            web::resource("/api/auth/session")
                .wrap(session_cors(cors_origins))
                .route(web::get().to(api::session)),
        )
        .route("/health", web::get().to(health::health_check))
        .route("/health/live", web::get().to(health::liveness_probe));
}
