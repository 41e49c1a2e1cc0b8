//! Repository for the `tasks` table.

use sqlx::types::Json;
use sqlx::PgPool;

use daygrid_core::day_range::DailyStatus;
use daygrid_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list for tasks queries.
const COLUMNS: &str = "id, title, task_type, date, end_date, week, status, daily_status";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List all tasks in stable store order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Create a new task, returning the created row.
    ///
    /// `daily_status` starts empty unless the payload carries entries.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let daily_status = Json(input.daily_status.clone().unwrap_or_default());
        let query = format!(
            "INSERT INTO tasks (title, task_type, date, end_date, week, status, daily_status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.task_type)
            .bind(input.date)
            .bind(input.end_date)
            .bind(input.week)
            .bind(&input.status)
            .bind(daily_status)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a task by ID, returning the updated row.
    ///
    /// Each scalar field is written only when the payload provided it
    /// (`CASE WHEN $provided THEN $value ELSE column END`), so an explicit
    /// null or empty string is applied while an omitted field is untouched.
    /// `daily_status` entries are merged key-wise via the jsonb `||`
    /// operator; keys not present in the patch survive.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let patch = Json(input.daily_status.clone().unwrap_or_default());
        let query = format!(
            "UPDATE tasks SET
                 title        = CASE WHEN $2  THEN $3  ELSE title END,
                 task_type    = CASE WHEN $4  THEN $5  ELSE task_type END,
                 date         = CASE WHEN $6  THEN $7  ELSE date END,
                 end_date     = CASE WHEN $8  THEN $9  ELSE end_date END,
                 week         = CASE WHEN $10 THEN $11 ELSE week END,
                 status       = CASE WHEN $12 THEN $13 ELSE status END,
                 daily_status = daily_status || $14
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(input.title.clone().flatten())
            .bind(input.task_type.is_some())
            .bind(input.task_type.clone().flatten())
            .bind(input.date.is_some())
            .bind(input.date.flatten())
            .bind(input.end_date.is_some())
            .bind(input.end_date.flatten())
            .bind(input.week.is_some())
            .bind(input.week.flatten())
            .bind(input.status.is_some())
            .bind(input.status.clone().flatten())
            .bind(patch)
            .fetch_optional(pool)
            .await
    }

    /// Merge day-status entries into a task's map, returning the updated
    /// row. Entries in `patch` overwrite same-day entries; all others
    /// survive.
    pub async fn merge_daily_status(
        pool: &PgPool,
        id: DbId,
        patch: &DailyStatus,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET daily_status = daily_status || $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(Json(patch))
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was deleted.
    ///
    /// Never touches messages; notes attached to the task remain.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the distinct category names currently in use, sorted.
    pub async fn list_types(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT task_type FROM tasks ORDER BY task_type")
            .fetch_all(pool)
            .await
    }
}
