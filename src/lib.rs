//! Velo - a minimal bike-catalog HTTP API
//!
//! Velo exposes four JSON routes (health check, get-by-id, list-with-filter,
//! create) over axum, with a PostgreSQL connection pool established and
//! verified at startup. No handler queries the pool yet; it is held as shared
//! state so a persistence layer can be injected later.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod types;

pub use api::{create_router, AppState};
pub use error::{Error, Result};
