use uuid::Uuid;

use crate::error::Result;
use crate::models::board::Board;
use crate::state::AppState;

/// Lists all boards owned by `owner_id`.
pub fn list_boards(state: &AppState, owner_id: Uuid) -> Vec<Board> {
    state.store.list_boards(owner_id)
}

/// Creates a new board owned by `owner_id`.
pub fn create_board(state: &AppState, owner_id: Uuid, name: String) -> Board {
    let board = state.store.create_board(owner_id, name);
    tracing::info!("✅ Board created: {} for user {}", board.id, owner_id);
    board
}

/// Renames a board owned by `owner_id`.
///
/// An absent or empty name keeps the current one; a board owned by someone
/// else is reported as not found.
pub fn rename_board(
    state: &AppState,
    owner_id: Uuid,
    board_id: Uuid,
    name: Option<String>,
) -> Result<Board> {
    state.store.rename_board(owner_id, board_id, name)
}

/// Deletes a board owned by `owner_id`, applying the configured policy to
/// its tasks.
pub fn delete_board(state: &AppState, owner_id: Uuid, board_id: Uuid) -> Result<()> {
    state.store.delete_board(owner_id, board_id)?;
    tracing::info!("✅ Board deleted: {} for user {}", board_id, owner_id);
    Ok(())
}
