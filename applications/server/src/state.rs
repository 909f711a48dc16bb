/// Shared application state
use sqlx::SqlitePool;

/// Application state shared across all handlers
///
/// Handlers receive the store through this injected state; there is no
/// process-wide model registry, and no state is kept between requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
