use std::sync::Arc;

use sea_orm::DatabaseConnection;

/// Shared per-process state. The connection is a pool; each operation
/// borrows it to open its own transaction.
#[derive(Clone)]
pub struct AppState {
    pub orm: Arc<DatabaseConnection>,
}

impl AppState {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self::from_shared(Arc::new(orm))
    }

    /// Build state around a connection the caller keeps a handle to.
    pub fn from_shared(orm: Arc<DatabaseConnection>) -> Self {
        Self { orm }
    }
}
