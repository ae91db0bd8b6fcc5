//! Axum HTTP handlers.

pub mod recommend;
