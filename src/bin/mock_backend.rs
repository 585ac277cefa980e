//! Mock backend for local development
//! Serves `/auth/login` and `/users/create` from memory, no real backend needed

use actix_web::{middleware::Logger, web, App, HttpServer};

use portal_auth::mocks::{configure_mock_backend, MockBackend};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let bind_address =
        std::env::var("MOCK_BACKEND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:4000".to_string());
    let backend = web::Data::new(MockBackend::seeded());

    log::info!("Mock backend listening on http://{}", bind_address);
    log::info!("Seeded account: demo / demo123");

    HttpServer::new(move || {
        App::new().app_data(backend.clone()).wrap(Logger::default()).configure(configure_mock_backend)
    })
    .bind(bind_address)?
    .run()
    .await
}
