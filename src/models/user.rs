use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Represents a registered user.
///
/// Users are created at registration and immutable afterwards; there is no
/// update or delete route for them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The unique identifier for the user.
    pub id: Uuid,
    /// The user's email address. Unique across the store.
    pub email: String,
    /// The user's Argon2id password hash. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The timestamp when the user registered.
    pub created_at: DateTime<Utc>,
}
