//! Message (note) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use daygrid_core::types::{DbId, Timestamp};

/// A row from the `messages` table: a timestamped free-text note attached
/// to a task.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: DbId,
    pub task_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for appending a note. `content` presence is checked by the handler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMessage {
    pub content: Option<String>,
}
