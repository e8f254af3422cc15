//! API server state

use sqlx::PgPool;

/// Shared state injected into every handler.
///
/// The pool is the only shared resource. No handler queries it yet; it is
/// carried here so a persistence layer can be injected without reaching for
/// ambient globals. `PgPool` is a cheap clonable handle over shared
/// connections and is safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
