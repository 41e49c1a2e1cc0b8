//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate, delegate to the corresponding repository in
//! `daygrid_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod message;
pub mod task;
