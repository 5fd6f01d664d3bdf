//! TutorTrack server binary.
//!
//! Wires configuration, the PostgreSQL pool, and the HTTP surface
//! together and serves the session API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tutortrack::adapters::auth::{JwtConfig, JwtTokenVerifier};
use tutortrack::adapters::http::middleware::{auth_middleware, AuthState};
use tutortrack::adapters::http::{session_router, SessionAppState};
use tutortrack::adapters::postgres::{
    PostgresAccessChecker, PostgresSessionReader, PostgresSessionRepository,
};
use tutortrack::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "starting tutortrack"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let state = SessionAppState::new(
        Arc::new(PostgresSessionRepository::new(pool.clone())),
        Arc::new(PostgresSessionReader::new(pool.clone())),
        Arc::new(PostgresAccessChecker::new(pool)),
    );

    let verifier: AuthState = Arc::new(JwtTokenVerifier::new(
        JwtConfig::new(
            &config.auth.jwt_secret,
            &config.auth.issuer,
            &config.auth.audience,
        )
        .with_leeway(config.auth.leeway_secs),
    ));

    let cors = cors_layer(&config);

    let app = session_router()
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(
            verifier,
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
