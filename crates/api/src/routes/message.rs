//! Route definitions for the message (note) resource.
//!
//! Mounted at `/messages` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::message;
use crate::state::AppState;

/// Message routes.
///
/// ```text
/// GET    /{task_id}   -> list_messages
/// POST   /{task_id}   -> create_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{task_id}",
        get(message::list_messages).post(message::create_message),
    )
}
