//! User Registry API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_registry::application::UserApplicationService;
use user_registry::domain::services::UserDomainService;
use user_registry::infrastructure::driven_adapters::config::{AppConfig, LogFormat};
use user_registry::infrastructure::driven_adapters::database;
use user_registry::infrastructure::driven_adapters::user_repository::PostgresUserRepository;
use user_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "user_registry=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    database::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Wire the layers: repository -> domain service -> application service
    let user_repository = Arc::new(PostgresUserRepository::new(pool));
    let user_domain_service = Arc::new(UserDomainService::new(user_repository));
    let user_application_service = Arc::new(UserApplicationService::new(user_domain_service));

    let app = api_rest::router(AppState::new(user_application_service));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
