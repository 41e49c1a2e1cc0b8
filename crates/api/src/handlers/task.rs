//! Handlers for the task resource.
//!
//! Covers CRUD over tasks, the derived category listing, and the two
//! day-level reads/writes built on `daygrid_core::day_range`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;

use daygrid_core::day_range::{self, DailyStatus};
use daygrid_core::task::validate_new_task;
use daygrid_core::types::DbId;
use daygrid_db::models::task::{CreateTask, Task, UpdateTask};
use daygrid_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /tasks
///
/// List all tasks.
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}

/// POST /tasks
///
/// Create a new task. `title`, `type`, and `date` must be present.
pub async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<impl IntoResponse> {
    validate_new_task(
        input.title.as_deref(),
        input.task_type.as_deref(),
        input.date,
    )
    .map_err(AppError::validation)?;

    let task = TaskRepo::create(&state.pool, &input).await?;

    tracing::info!(
        task_id = task.id,
        title = %task.title,
        task_type = %task.task_type,
        "Task created"
    );

    Ok((StatusCode::CREATED, Json(task)))
}

/// PATCH /tasks/{id}
///
/// Partially update a task. Omitted fields are untouched; explicit nulls
/// and empty strings are applied (except on the fields every task must
/// carry); `dailyStatus` entries are merged into the stored map.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<impl IntoResponse> {
    if let Some(field) = input.null_required_field() {
        return Err(AppError::validation(format!(
            "Field '{field}' cannot be null"
        )));
    }

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))?;

    tracing::info!(task_id = id, "Task updated");

    Ok(Json(task))
}

/// DELETE /tasks/{id}
///
/// Delete a task. Deleting an id that no longer exists still reports
/// success; messages attached to the task are left in place.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;

    tracing::info!(task_id = id, deleted, "Task delete");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /tasks/types
///
/// List the distinct categories currently in use. The category set is
/// open: it is whatever `type` values existing tasks carry.
pub async fn list_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let types = TaskRepo::list_types(&state.pool).await?;
    Ok(Json(types))
}

/// GET /tasks/day/{date}
///
/// List the tasks active on a calendar day, each with its `status` field
/// carrying the resolved per-day completion state.
pub async fn list_day(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<impl IntoResponse> {
    let tasks = TaskRepo::list(&state.pool).await?;

    let resolved: Vec<Task> = tasks
        .into_iter()
        .filter_map(|mut task| {
            let day = day_range::resolve_day(task.date, task.end_date, &task.daily_status, date);
            if !day.active {
                return None;
            }
            task.status = Some(day.status.as_str().to_string());
            Some(task)
        })
        .collect();

    Ok(Json(resolved))
}

/// PATCH /tasks/{id}/days/{date}/toggle
///
/// Flip one day's completion state: the currently resolved status is
/// negated and written as a single merged map entry.
pub async fn toggle_day(
    State(state): State<AppState>,
    Path((id, date)): Path<(DbId, NaiveDate)>,
) -> AppResult<impl IntoResponse> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))?;

    let (key, next) = day_range::toggle_day(&task.daily_status, date);
    let patch = DailyStatus::from([(key, next)]);

    let updated = TaskRepo::merge_daily_status(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))?;

    tracing::info!(task_id = id, day = %date, status = next.as_str(), "Day status toggled");

    Ok(Json(updated))
}
