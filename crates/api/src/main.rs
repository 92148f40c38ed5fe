use std::net::SocketAddr;
use std::sync::Arc;

use perfdash_db::{ItemStore, MemoryItemStore, PgItemStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use perfdash_api::config::ServerConfig;
use perfdash_api::router::build_app_router;
use perfdash_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "perfdash_api=debug,perfdash_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Store ---
    let (store, pool) = match &config.database_url {
        Some(database_url) => {
            let pool = perfdash_db::create_pool(database_url, config.db_max_connections)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            perfdash_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            perfdash_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            let store: Arc<dyn ItemStore> = Arc::new(PgItemStore::new(pool.clone()));
            (store, Some(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory item store");
            let store: Arc<dyn ItemStore> = Arc::new(MemoryItemStore::new());
            (store, None)
        }
    };

    // --- App state ---
    let state = AppState {
        store,
        pool,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or (on Unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
