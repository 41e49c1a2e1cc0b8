//! Handlers for the message (note) resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use daygrid_core::message::validate_content;
use daygrid_core::types::DbId;
use daygrid_db::models::message::CreateMessage;
use daygrid_db::repositories::MessageRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /messages/{task_id}
///
/// List a task's notes, earliest first. A task with no notes (or an
/// unknown task id) yields an empty array, not an error.
pub async fn list_messages(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let messages = MessageRepo::list_for_task(&state.pool, task_id).await?;
    Ok(Json(messages))
}

/// POST /messages/{task_id}
///
/// Append a note to a task. `content` must be non-empty; the task id is
/// not checked for existence.
pub async fn create_message(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<CreateMessage>,
) -> AppResult<impl IntoResponse> {
    let content = validate_content(input.content.as_deref()).map_err(AppError::validation)?;

    let message = MessageRepo::create(&state.pool, task_id, content).await?;

    tracing::info!(
        message_id = message.id,
        task_id,
        "Note appended"
    );

    Ok((StatusCode::CREATED, Json(message)))
}
