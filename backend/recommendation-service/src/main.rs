use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::io;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recommendation_service::app_state::AppState;
use recommendation_service::artifacts;
use recommendation_service::config::Config;
use recommendation_service::routes::configure_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    tracing::info!(
        "Starting recommendation-service v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Environment: {}", config.app.env);

    // Load the precomputed model artifacts. A failed load is not fatal:
    // the service starts in a limited mode where every model-backed
    // endpoint answers 503 until the artifacts are fixed and the process
    // restarted.
    let model = match artifacts::load_model(
        Path::new(&config.artifacts.dir),
        config.recommendation.max_recommendations,
    ) {
        Ok(context) => {
            tracing::info!(
                titles = context.engine.titles().len(),
                "recommendation model loaded"
            );
            Some(context)
        }
        Err(e) => {
            tracing::warn!(
                error = ?e,
                "failed to load model artifacts - running in limited mode without recommendations"
            );
            None
        }
    };

    let bind_addr = format!("{}:{}", config.app.host, config.app.port);
    let state = AppState::new(config, model);

    tracing::info!("HTTP server listening on {}", bind_addr);

    HttpServer::new(move || {
        // Build CORS configuration from allowed_origins
        let mut cors = Cors::default();
        for origin in state.config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
