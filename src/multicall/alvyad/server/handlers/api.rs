use super::super::state::ServerState;
use crate::core::allocation::{allocate, suggest_from_history};
use crate::core::evaluator::{evaluate, DEFAULT_TICKS};
use crate::core::info::{ErrorInfo, TaskRequest};
use crate::core::rolling::{default_window, rolling_average};
use crate::core::sampler::Sampler;
use crate::core::EngineError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

fn error_response(err: EngineError) -> Response {
    let (status, error) = match &err {
        EngineError::InvalidTask(_) => (StatusCode::NOT_FOUND, "Invalid Task"),
        EngineError::InvalidTicks => (StatusCode::BAD_REQUEST, "Invalid sampling length"),
        EngineError::MetricsUnavailable(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, "System metrics unavailable")
        }
    };
    let body = ErrorInfo {
        error: error.to_string(),
        detail: Some(err.to_string()),
    };
    (status, Json(body)).into_response()
}

/// Run a sampling job on the blocking pool with its own sampler.
async fn run_sampling<T, F>(state: &ServerState, job: F) -> Result<T, Response>
where
    T: Send + 'static,
    F: FnOnce(&mut (dyn Sampler + Send)) -> Result<T, EngineError> + Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || {
        let mut sampler = state.new_sampler()?;
        job(sampler.as_mut())
    })
    .await
    .map_err(|e| {
        tracing::error!("Sampling task panicked or was cancelled: {e}");
        let body = ErrorInfo {
            error: "Internal error".to_string(),
            detail: None,
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    })?
    .map_err(error_response)
}

fn ok_json<T: Serialize>(value: T) -> Response {
    (StatusCode::OK, Json(value)).into_response()
}

#[axum::debug_handler]
pub(in crate::multicall::alvyad::server) async fn list_tasks(
    State(state): State<ServerState>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(state.catalog.tasks().to_vec()))
}

#[axum::debug_handler]
pub(in crate::multicall::alvyad::server) async fn list_history(
    State(state): State<ServerState>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(state.history.records().to_vec()))
}

#[axum::debug_handler]
pub(in crate::multicall::alvyad::server) async fn rolling_history(
    State(state): State<ServerState>,
) -> impl IntoResponse {
    let points = rolling_average(state.history.records(), default_window());
    (StatusCode::OK, Json(points))
}

#[axum::debug_handler]
pub(in crate::multicall::alvyad::server) async fn monitor_task(
    State(state): State<ServerState>,
    Json(input): Json<TaskRequest>,
) -> Response {
    let task_id = input.task_id;
    tracing::info!("Monitoring task {task_id}");
    // Reject unknown ids before a sampler is even built
    if !state.catalog.contains(task_id) {
        tracing::warn!("Monitor request for unknown task {task_id}");
        return error_response(EngineError::InvalidTask(task_id));
    }

    let catalog = Arc::clone(&state.catalog);
    match run_sampling(&state, move |sampler| {
        evaluate(task_id, &catalog, sampler, DEFAULT_TICKS)
    })
    .await
    {
        Ok(result) => ok_json(result),
        Err(response) => response,
    }
}

#[axum::debug_handler]
pub(in crate::multicall::alvyad::server) async fn allocate_task(
    State(state): State<ServerState>,
    Json(input): Json<TaskRequest>,
) -> Response {
    let task_id = input.task_id;
    tracing::info!("Allocating task {task_id}");
    if !state.catalog.contains(task_id) {
        tracing::warn!("Allocate request for unknown task {task_id}");
        return error_response(EngineError::InvalidTask(task_id));
    }

    let catalog = Arc::clone(&state.catalog);
    let history = Arc::clone(&state.history);
    match run_sampling(&state, move |sampler| {
        allocate(
            task_id,
            &catalog,
            &history,
            sampler,
            DEFAULT_TICKS,
            default_window(),
        )
    })
    .await
    {
        Ok(allocation) => ok_json(allocation),
        Err(response) => response,
    }
}

#[axum::debug_handler]
pub(in crate::multicall::alvyad::server) async fn suggestion(
    State(state): State<ServerState>,
) -> impl IntoResponse {
    let (_, suggestion) = suggest_from_history(&state.history, &state.catalog, default_window());
    (StatusCode::OK, Json(suggestion))
}

#[axum::debug_handler]
pub(in crate::multicall::alvyad::server) async fn get_health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
