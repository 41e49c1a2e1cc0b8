pub mod health;
pub mod message;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /tasks                              list, create
/// /tasks/types                        distinct categories
/// /tasks/day/{date}                   tasks active on a day, resolved
/// /tasks/{id}                         partial update, delete
/// /tasks/{id}/days/{date}/toggle      toggle one day's status
///
/// /messages/{task_id}                 list notes, append note
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tasks", task::router())
        .nest("/messages", message::router())
}
