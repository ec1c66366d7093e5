use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use quill_storage::store::TextPieceStore;
use quill_web::config::QuillConfig;
use quill_web::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = QuillConfig::from_env()?;

    let store = TextPieceStore::open(&config.database_url).await?;
    let state = AppState::new(store.clone())?;
    let app = quill_web::router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutting down");
    store.close().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
    }
}
