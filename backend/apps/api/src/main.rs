//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request errors are rendered by each
//! crate's error type through `kernel::AppError`.

use auth::{TokenConfig, TokenIssuer, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use certificate::{CertificateIdGenerator, certificate_router};
use platform::clock::SystemClock;
use platform::crypto::OsEntropy;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,certificate=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Token configuration: a missing secret stops startup here
    let token_config = Arc::new(TokenConfig::from_env()?);
    tracing::info!(
        environment = %token_config.environment(),
        token_lifetime = %token_config.token_lifetime(),
        cookie_expire_days = token_config.cookie_expire_days(),
        "Loaded session token configuration"
    );

    let issuer = Arc::new(TokenIssuer::new(token_config, SystemClock));
    let generator = Arc::new(CertificateIdGenerator::new(SystemClock, OsEntropy));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(issuer))
        .nest("/api/certificates", certificate_router(generator))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = match env::var("PORT") {
        Ok(value) => value.trim().parse::<u16>()?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
