//! Metro Listings server binary.
//!
//! Loads configuration, connects to PostgreSQL, wires the adapters to
//! the domain, and serves the listings API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use metro_listings::adapters::http::{api_router, AppState};
use metro_listings::adapters::payment::UnconfiguredPaymentProvider;
use metro_listings::adapters::postgres::PostgresListingStore;
use metro_listings::config::{AppConfig, ServerConfig};
use metro_listings::domain::webhook::{ActivationEngine, WebhookVerifier};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);
    info!(
        environment = ?config.server.environment,
        "starting metro-listings"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!().run(&pool).await?;
    }

    let store = Arc::new(PostgresListingStore::new(
        pool,
        config.database.statement_timeout(),
    ));
    let state = AppState {
        store: store.clone(),
        verifier: Arc::new(WebhookVerifier::new(config.payment.webhook_secret.clone())),
        engine: Arc::new(ActivationEngine::new(store)),
        payments: Arc::new(UnconfiguredPaymentProvider),
    };

    let app = api_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
