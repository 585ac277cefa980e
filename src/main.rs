use actix_web::{middleware::Logger, web, App, HttpServer};

use portal_auth::config::load_config;
use portal_auth::routes::configure_routes;
use portal_auth::state::AppState;
use portal_auth::types::StartupError;
use portal_auth::{SERVICE_NAME, VERSION};

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config().map_err(|e| StartupError::Config(e.to_string()))?;
    let state = web::Data::new(AppState::from_config(&config));
    let cors_origins = config.cors_origins.clone();
    let bind_address = (config.server.host.clone(), config.server.port);

    log::info!(
        "Starting {} v{} on {}:{} (backend {}, cookie domain {:?})",
        SERVICE_NAME,
        VERSION,
        bind_address.0,
        bind_address.1,
        config.backend_url,
        state.cookies.domain,
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(|cfg| configure_routes(cfg, &cors_origins))
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(bind_address)
        .map_err(|e| StartupError::ServerBind(e.to_string()))?
        .run()
        .await
        .map_err(|e| StartupError::ServerBind(e.to_string()))
}
