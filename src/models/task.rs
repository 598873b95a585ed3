use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not finished yet. The default for new tasks.
    Pending,
    /// Finished.
    Completed,
}

/// Represents a task attached to a board.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// The unique identifier for the task.
    pub id: Uuid,
    /// The ID of the board this task belongs to. Tasks are never re-parented
    /// across boards.
    pub board_id: Uuid,
    /// The ID of the user who owns the task. Always the board's owner.
    pub user_id: Uuid,
    /// The title of the task.
    pub title: String,
    /// An optional free-form description.
    pub description: Option<String>,
    /// An optional due date.
    pub due_date: Option<NaiveDate>,
    /// The completion state.
    pub status: TaskStatus,
    /// The timestamp when the task was created.
    pub created_at: DateTime<Utc>,
}

/// The fields a caller supplies when creating a task.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// A partial update to a task.
///
/// Nullish merge semantics: a `None` field (absent or `null` in the request)
/// keeps the stored value; a present value replaces it, including falsy ones
/// such as an empty title.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
}
