//! Pinterest API - scaffold backend for a pinboard service
//!
//! The service currently provides:
//! - A `GET /health` liveness probe
//! - Placeholder routes under `/api` that answer with fixed messages
//! - The [`schema::UserProfile`] record, not yet wired to any route

pub mod api;
pub mod config;
pub mod error;
pub mod schema;

pub use error::{Error, Result};
