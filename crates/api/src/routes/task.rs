//! Route definitions for the task resource.
//!
//! Mounted at `/tasks` by `api_routes()`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Task routes.
///
/// ```text
/// GET    /                            -> list_tasks
/// POST   /                            -> create_task
/// GET    /types                       -> list_types
/// GET    /day/{date}                  -> list_day
/// PATCH  /{id}                        -> update_task
/// DELETE /{id}                        -> delete_task
/// PATCH  /{id}/days/{date}/toggle     -> toggle_day
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list_tasks).post(task::create_task))
        .route("/types", get(task::list_types))
        .route("/day/{date}", get(task::list_day))
        .route(
            "/{id}",
            patch(task::update_task).delete(task::delete_task),
        )
        .route("/{id}/days/{date}/toggle", patch(task::toggle_day))
}
