use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::token::Claims,
    error::Result,
    models::task::{TaskDraft, TaskPatch, TaskStatus},
    services::tasks as task_service,
    state::AppState,
};

/// The request payload for creating a task.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// The request payload for a partial task update.
///
/// Absent or `null` fields keep their stored values.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
}

/// Lists the caller's tasks on a board.
#[axum::debug_handler]
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(board_id): Path<Uuid>,
) -> Result<Response> {
    let tasks = task_service::list_tasks(&state, claims.sub, board_id);
    Ok((StatusCode::OK, Json(tasks)).into_response())
}

/// Creates a new task on a board.
#[axum::debug_handler]
pub async fn create_task(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(board_id): Path<Uuid>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Response> {
    let draft = TaskDraft {
        title: req.title,
        description: req.description,
        due_date: req.due_date,
    };
    let task = task_service::create_task(&state, claims.sub, board_id, draft);
    Ok((StatusCode::OK, Json(task)).into_response())
}

/// Applies a partial update to a task.
#[axum::debug_handler]
pub async fn update_task(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((board_id, task_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Response> {
    let patch = TaskPatch {
        title: req.title,
        description: req.description,
        due_date: req.due_date,
        status: req.status,
    };
    let task = task_service::update_task(&state, claims.sub, board_id, task_id, patch)?;
    Ok((StatusCode::OK, Json(task)).into_response())
}

/// Deletes a task.
#[axum::debug_handler]
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((board_id, task_id)): Path<(Uuid, Uuid)>,
) -> Result<Response> {
    task_service::delete_task(&state, claims.sub, board_id, task_id)?;
    Ok((
        StatusCode::OK,
        [(http::header::CONTENT_TYPE, "application/json")],
        r#"{"message":"Task deleted"}"#,
    )
        .into_response())
}
