//! Movies Cache - A warm cache in front of the TMDB upcoming listing

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movies_cache::api::create_router;
use movies_cache::cache::{Cache, MemoryCache, RedisCache};
use movies_cache::tmdb::TmdbClient;
use movies_cache::{spawn_refresh_task, AppState, Config};

/// Main entry point for the movies cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect the cache backend (Redis, or in-memory when unset)
/// 4. Start background warm-up task
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movies_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Movies Cache Server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, language={}, redis={}, port={}, refresh_interval={}s",
        config.base_url,
        config.language,
        config.redis_url.as_deref().unwrap_or("<in-memory>"),
        config.server_port,
        config.refresh_interval
    );
    if config.api_key.is_empty() {
        warn!("TMDB_API_KEY is not set, upstream requests will be rejected");
    }

    let cache: Arc<dyn Cache> = match &config.redis_url {
        Some(url) => Arc::new(
            RedisCache::connect(url)
                .await
                .context("failed to connect to Redis")?,
        ),
        None => Arc::new(MemoryCache::new()),
    };

    let client = TmdbClient::from_config(&config).context("failed to build upstream client")?;
    let state = AppState::new(Arc::new(client), cache);

    let refresh_handle = spawn_refresh_task(state.warmer.clone(), config.refresh_interval);
    info!("Background warm-up task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(refresh_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the warm-up task and allows graceful shutdown.
async fn shutdown_signal(refresh_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    refresh_handle.abort();
    warn!("Warm-up task aborted");
}
