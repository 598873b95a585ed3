use serde::Serialize;
use uuid::Uuid;

/// Represents a task board.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// The unique identifier for the board.
    pub id: Uuid,
    /// The ID of the user who owns the board. Immutable after creation and
    /// the sole authorization key for every board operation.
    pub user_id: Uuid,
    /// The name of the board. Not required to be unique.
    pub name: String,
}
