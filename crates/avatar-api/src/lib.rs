//! Avatar API Library
//!
//! This crate provides the HTTP handlers, middleware, and application setup
//! for the avatar upload endpoint.

pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
