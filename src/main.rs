use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpServer};
use blindl_match::config::{CorsSettings, Settings};
use blindl_match::core::Matcher;
use blindl_match::routes::{
    self, handle_json_payload_error, handle_query_payload_error, AppState,
};
use blindl_match::services::{load_seed_profiles, InMemoryProfileStore};
use blindl_match::telemetry;
use std::sync::Arc;
use tracing::{error, info, warn};

fn build_cors(settings: &CorsSettings) -> Cors {
    let cors = settings
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![
            header::CONTENT_RANGE,
            header::HeaderName::from_static("x-content-range"),
        ])
        .supports_credentials()
        .max_age(settings.max_age_secs)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    telemetry::init(&settings.logging).map_err(|e| {
        eprintln!("Failed to initialize logging: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!("Starting Blindl matching service...");

    // A missing or broken seed file is not fatal
    let seed = match &settings.store.seed_path {
        Some(path) => load_seed_profiles(path).await.unwrap_or_else(|e| {
            error!("Error loading seed profiles: {}", e);
            Vec::new()
        }),
        None => {
            warn!("No seed file configured, starting with an empty profile store");
            Vec::new()
        }
    };

    info!("Profile store initialized with {} profiles", seed.len());
    let store = Arc::new(InMemoryProfileStore::with_profiles(seed));

    let weights = settings.scoring_weights();
    if weights.total() > 100.0 {
        warn!("Scoring weights sum to {}, scores will be clamped to 100", weights.total());
    }
    let matcher = Matcher::new(weights, settings.matching.default_limit);

    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState::new(store, matcher, settings.matching.max_limit);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let cors_settings = settings.cors.clone();

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(build_cors(&cors_settings))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
