pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::services::repository::RepositorySync;
use crate::services::sessions::SessionRegistry;
use crate::services::settings::SettingsStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub settings: Arc<SettingsStore>,
    pub repository: Arc<RepositorySync>,
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            settings: Arc::new(SettingsStore::new(&config.settings_path)),
            repository: Arc::new(RepositorySync::new(&config.workspace_dir)),
            sessions: Arc::new(SessionRegistry::new(config.session_ttl)),
            config: Arc::new(config),
        }
    }
}

/// Build the router with all routes.
pub fn app(state: AppState) -> Router {
    let protected_routes = Router::new()
        // Session routes
        .route("/api/session/status", get(routes::session::status))
        // Settings routes
        .route(
            "/api/settings",
            get(routes::settings::get).put(routes::settings::update),
        )
        // Repository routes
        .route("/api/repository/sync", post(routes::repository::sync))
        // File routes
        .route("/api/files", get(routes::files::list))
        .route("/api/files/open", post(routes::files::open))
        .route("/api/documents", get(routes::files::documents))
        // Quiz routes
        .route("/api/quiz/start", post(routes::quiz::start))
        .route("/api/quiz/current", get(routes::quiz::current))
        .route("/api/quiz/answer", post(routes::quiz::answer))
        .route("/api/quiz/next", post(routes::quiz::next))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/session/register", post(routes::session::register))
        .merge(protected_routes)
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!("Workspace directory: {}", config.workspace_dir.display());
    tracing::info!("Settings file: {}", config.settings_path.display());
    tracing::info!("Session idle timeout: {}s", config.session_ttl.num_seconds());

    let addr = config.addr();
    let state = AppState::new(config);

    let app = app(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
