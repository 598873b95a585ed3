//! The storage layer.
//!
//! Handlers and services depend on the [`Store`] trait only; the concrete
//! backend is injected through `AppState`. The shipped implementation is
//! [`memory::MemoryStore`].

pub mod memory;

use uuid::Uuid;

use crate::error::Result;
use crate::models::board::Board;
use crate::models::task::{Task, TaskDraft, TaskPatch};
use crate::models::user::User;

/// What happens to a board's tasks when the board is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Leave the tasks in the store. They remain listable under their old
    /// board ID.
    Orphan,
    /// Remove the tasks together with the board.
    Cascade,
}

/// The persistence contract for users, boards and tasks.
///
/// Every board and task operation is scoped by the caller's identity: a
/// resource that exists but belongs to someone else behaves exactly like a
/// resource that does not exist.
pub trait Store: Send + Sync {
    /// Creates a user. Fails with `DuplicateUser` if the email is taken,
    /// leaving the store unchanged.
    fn create_user(&self, email: String, password_hash: String) -> Result<User>;

    /// Looks a user up by email.
    fn find_user_by_email(&self, email: &str) -> Option<User>;

    /// All boards owned by `owner_id`.
    fn list_boards(&self, owner_id: Uuid) -> Vec<Board>;

    /// Creates a board for `owner_id`. Names are not required to be unique.
    fn create_board(&self, owner_id: Uuid, name: String) -> Board;

    /// Renames a board. An absent or empty `name` keeps the current one.
    fn rename_board(&self, owner_id: Uuid, board_id: Uuid, name: Option<String>) -> Result<Board>;

    /// Deletes a board. The fate of its tasks follows the store's
    /// [`DeletePolicy`].
    fn delete_board(&self, owner_id: Uuid, board_id: Uuid) -> Result<()>;

    /// All tasks under `board_id` owned by `owner_id`.
    fn list_tasks(&self, owner_id: Uuid, board_id: Uuid) -> Vec<Task>;

    /// Creates a task under `board_id` with status `Pending`.
    ///
    /// The board's existence is not checked; a task may be created under any
    /// board ID the caller names.
    fn create_task(&self, owner_id: Uuid, board_id: Uuid, draft: TaskDraft) -> Task;

    /// Applies a nullish-merge partial update to a task.
    fn update_task(
        &self,
        owner_id: Uuid,
        board_id: Uuid,
        task_id: Uuid,
        patch: TaskPatch,
    ) -> Result<Task>;

    /// Deletes a task.
    fn delete_task(&self, owner_id: Uuid, board_id: Uuid, task_id: Uuid) -> Result<()>;
}
