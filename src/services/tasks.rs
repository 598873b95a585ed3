use uuid::Uuid;

use crate::error::Result;
use crate::models::task::{Task, TaskDraft, TaskPatch};
use crate::state::AppState;

/// Lists the tasks under `board_id` owned by `owner_id`.
pub fn list_tasks(state: &AppState, owner_id: Uuid, board_id: Uuid) -> Vec<Task> {
    state.store.list_tasks(owner_id, board_id)
}

/// Creates a task under `board_id` for `owner_id` with status `Pending`.
pub fn create_task(state: &AppState, owner_id: Uuid, board_id: Uuid, draft: TaskDraft) -> Task {
    let task = state.store.create_task(owner_id, board_id, draft);
    tracing::info!("✅ Task created: {} on board {}", task.id, board_id);
    task
}

/// Applies a partial update to a task.
///
/// Only fields present in `patch` replace stored values (nullish merge).
pub fn update_task(
    state: &AppState,
    owner_id: Uuid,
    board_id: Uuid,
    task_id: Uuid,
    patch: TaskPatch,
) -> Result<Task> {
    state.store.update_task(owner_id, board_id, task_id, patch)
}

/// Deletes a task.
pub fn delete_task(state: &AppState, owner_id: Uuid, board_id: Uuid, task_id: Uuid) -> Result<()> {
    state.store.delete_task(owner_id, board_id, task_id)?;
    tracing::info!("✅ Task deleted: {} on board {}", task_id, board_id);
    Ok(())
}
