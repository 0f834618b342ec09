use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenService;
use chrono::Duration;
use identity_service::config::Config;
use identity_service::domain::user::service::UserDirectory;
use identity_service::inbound::http::middleware::AuthGate;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::PostgresUserStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // Secrets (pepper, signing secret) are deliberately left out of this line.
    tracing::info!(
        http_port = config.server.http_port,
        password_cost = config.password.cost,
        token_lifetime_hours = config.token.lifetime_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    // Both constructors validate their configuration; a bad pepper, cost,
    // or signing secret stops the service here.
    let password_hasher = Arc::new(PasswordHasher::new(
        &config.password.pepper,
        config.password.cost,
    )?);
    let token_service = Arc::new(TokenService::new(
        &config.token.secret,
        Duration::hours(config.token.lifetime_hours),
    )?);
    let auth_gate = Arc::new(AuthGate::new(Arc::clone(&token_service)));

    let user_store = Arc::new(PostgresUserStore::new(pg_pool));
    let user_directory = Arc::new(UserDirectory::new(
        user_store,
        password_hasher,
        token_service,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_directory, auth_gate);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
