//! API Server Entry Point
//!
//! Wires the feature crates into one axum server. `anyhow` is only used
//! for startup failures; request errors are rendered by each crate.

mod app;
mod config;

use app::{AppComponents, build_router};
use auth::{AuthAppState, AuthConfig};
use axum::http::{self, Method, header};
use config::AppConfig;
use content::FsContentRepository;
use content::application::config::ContentConfig;
use engagement::{EngagementAppState, EngagementConfig, PgEngagementRepository};
use platform::rate_limit::RateLimiter;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use summary::{AnthropicClient, SummaryAppState, SummaryConfig};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,content=info,engagement=info,summary=info,tower_http=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Content
    let content_config = ContentConfig::new(config.content_dir.clone());
    let content_repo = FsContentRepository::load(&content_config.content_dir).await?;

    // One limiter shared by every rate-limited endpoint
    let limiter = Arc::new(RateLimiter::in_memory(config.rate_limit_sweep_threshold));

    // Auth
    if !config.auth_configured() {
        tracing::warn!("JWT_SECRET or ADMIN_PASSWORD missing, admin login is disabled");
    }
    let auth_state = AuthAppState::new(AuthConfig::new(
        config.jwt_secret.clone(),
        config.admin_password.clone(),
        config.production,
    ));

    // Newsletter, analytics and comments
    let engagement_state = EngagementAppState::new(
        PgEngagementRepository::new(pool.clone()),
        limiter.clone(),
        EngagementConfig::default(),
    );

    // AI summary
    let client = match config.anthropic_api_key.as_deref() {
        Some(key) => Some(AnthropicClient::new(key)),
        None => {
            tracing::warn!("ANTHROPIC_API_KEY not set, AI summary is disabled");
            None
        }
    };
    let mut summary_config = SummaryConfig::default();
    if let Some(model) = config.summary_model.clone() {
        summary_config.model = model;
    }
    let summary_state = SummaryAppState::new(client, limiter, summary_config);

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    let app = build_router(AppComponents {
        auth: auth_state,
        content_repo,
        content_config,
        engagement: engagement_state,
        summary: summary_state,
    })
    .layer(TraceLayer::new_for_http())
    .layer(cors);

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
