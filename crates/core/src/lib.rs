//! Domain logic shared by the repository and API layers.
//!
//! This crate has zero internal dependencies so the day-resolution logic
//! and error taxonomy can be used from the API, the repositories, and any
//! future CLI tooling without pulling in sqlx or axum.

pub mod day_range;
pub mod error;
pub mod message;
pub mod task;
pub mod types;
