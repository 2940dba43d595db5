use std::sync::Arc;

use crate::config::ServerConfig;
use crate::import_sessions::ImportSessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: labka_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-flight bulk import sessions, one per open import dialog.
    pub import_sessions: Arc<ImportSessionStore>,
}
