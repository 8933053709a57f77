use std::sync::Arc;

use auth::SessionTokens;
use auth::SystemClock;
use blog_service::config::Config;
use blog_service::domain::comment::ports::CommentRepository;
use blog_service::domain::identity::ports::CredentialStore;
use blog_service::domain::post::ports::PostRepository;
use blog_service::inbound::http::router::create_router;
use blog_service::inbound::http::router::AppState;
use blog_service::outbound::hashing::Argon2PasswordHasher;
use blog_service::outbound::repositories::InMemoryCommentRepository;
use blog_service::outbound::repositories::InMemoryCredentialStore;
use blog_service::outbound::repositories::InMemoryPostRepository;
use blog_service::outbound::repositories::PostgresCommentRepository;
use blog_service::outbound::repositories::PostgresCredentialStore;
use blog_service::outbound::repositories::PostgresPostRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type Repositories = (
    Arc<dyn CredentialStore>,
    Arc<dyn PostRepository>,
    Arc<dyn CommentRepository>,
);

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "blog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    let storage = match config.database_url() {
        Some(_) => "postgresql",
        None => "memory",
    };
    tracing::info!(
        http_port = config.server.http_port,
        storage,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let (credentials, posts, comments) = repositories(&config).await?;

    let tokens = Arc::new(SessionTokens::new(
        config.jwt.secret.as_bytes(),
        config.token_ttl()?,
        Arc::new(SystemClock),
    )?);

    let state = AppState::new(
        credentials,
        Arc::new(Argon2PasswordHasher::new()),
        posts,
        comments,
        tokens,
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

/// PostgreSQL adapters when a database is configured, in-memory ones otherwise.
async fn repositories(config: &Config) -> Result<Repositories, anyhow::Error> {
    let Some(url) = config.database_url() else {
        tracing::warn!(storage = "memory", "No database configured, data is not persisted");
        let credentials: Arc<dyn CredentialStore> = Arc::new(InMemoryCredentialStore::new());
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
        let comments: Arc<dyn CommentRepository> = Arc::new(InMemoryCommentRepository::new());
        return Ok((credentials, posts, comments));
    };

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let credentials: Arc<dyn CredentialStore> =
        Arc::new(PostgresCredentialStore::new(pg_pool.clone()));
    let posts: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pg_pool.clone()));
    let comments: Arc<dyn CommentRepository> = Arc::new(PostgresCommentRepository::new(pg_pool));

    Ok((credentials, posts, comments))
}
