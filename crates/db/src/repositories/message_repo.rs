//! Repository for the `messages` table.

use sqlx::PgPool;

use daygrid_core::types::DbId;

use crate::models::message::Message;

/// Column list for messages queries.
const COLUMNS: &str = "id, task_id, content, created_at";

/// Provides append and list operations for task notes. The note log is
/// append-only; there is no update or delete path.
pub struct MessageRepo;

impl MessageRepo {
    /// List all notes for a task, earliest first.
    ///
    /// `task_id` is not checked against task existence — an unknown id
    /// simply yields an empty list.
    pub async fn list_for_task(pool: &PgPool, task_id: DbId) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM messages
             WHERE task_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Append a note to a task, returning the created row with its
    /// server-assigned id and timestamp.
    pub async fn create(
        pool: &PgPool,
        task_id: DbId,
        content: &str,
    ) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (task_id, content)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(task_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }
}
