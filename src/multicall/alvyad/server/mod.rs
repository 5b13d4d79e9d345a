mod handlers;
pub mod state;

use crate::core::history::UsageHistory;
use crate::core::task::TaskCatalog;
use axum::{
    routing::{get, post},
    Router,
};
pub use state::ServerState;

pub async fn run(config: crate::config::Config) -> anyhow::Result<()> {
    let catalog = TaskCatalog::builtin();
    let history = UsageHistory::builtin()?;

    for record in history.dangling_records(&catalog) {
        tracing::warn!(
            task_id = record.task_id,
            timestamp = %record.timestamp,
            "History record references an unknown task"
        );
    }
    tracing::info!(
        tasks = catalog.len(),
        history = history.len(),
        "Loaded built-in tables"
    );

    let app = router(ServerState::new(catalog, history));

    let addr = config.daemon.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on: http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Shut down");
    Ok(())
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/monitor", get(handlers::pages::monitor))
        .route("/allocate", get(handlers::pages::allocate))
        .route("/assets/{*path}", get(handlers::pages::asset))
        .route("/api/tasks", get(handlers::api::list_tasks))
        .route("/api/history", get(handlers::api::list_history))
        .route("/api/history/rolling", get(handlers::api::rolling_history))
        .route("/api/monitor", post(handlers::api::monitor_task))
        .route("/api/allocate", post(handlers::api::allocate_task))
        .route("/api/suggestion", get(handlers::api::suggestion))
        .route("/health", get(handlers::api::get_health))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl-C, shutting down");
}
