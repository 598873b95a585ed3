use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::token::Claims,
    error::Result,
    services::boards as board_service,
    state::AppState,
};

/// The request payload for creating a board.
#[derive(Deserialize)]
pub struct CreateBoardRequest {
    pub name: String,
}

/// The request payload for renaming a board.
///
/// `name` is optional: an absent or empty name keeps the current one.
#[derive(Deserialize)]
pub struct RenameBoardRequest {
    pub name: Option<String>,
}

/// Lists the caller's boards.
#[axum::debug_handler]
pub async fn list_boards(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Response> {
    let boards = board_service::list_boards(&state, claims.sub);
    Ok((StatusCode::OK, Json(boards)).into_response())
}

/// Creates a new board.
#[axum::debug_handler]
pub async fn create_board(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateBoardRequest>,
) -> Result<Response> {
    let board = board_service::create_board(&state, claims.sub, req.name);
    Ok((StatusCode::OK, Json(board)).into_response())
}

/// Renames a board.
#[axum::debug_handler]
pub async fn rename_board(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(board_id): Path<Uuid>,
    Json(req): Json<RenameBoardRequest>,
) -> Result<Response> {
    let board = board_service::rename_board(&state, claims.sub, board_id, req.name)?;
    Ok((StatusCode::OK, Json(board)).into_response())
}

/// Deletes a board.
#[axum::debug_handler]
pub async fn delete_board(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(board_id): Path<Uuid>,
) -> Result<Response> {
    board_service::delete_board(&state, claims.sub, board_id)?;
    Ok((
        StatusCode::OK,
        [(http::header::CONTENT_TYPE, "application/json")],
        r#"{"message":"Board deleted successfully"}"#,
    )
        .into_response())
}
