pub mod health;
pub mod importer;
pub mod shelters;

use axum::Router;

use crate::state::AppState;

/// Request body allowance on top of the import file size, covering
/// multipart boundaries and part headers.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /shelters                                 create (POST)
/// /shelters/{id}                            get
/// /shelters/{id}/pets                       list pets
/// /shelters/{id}/import                     upload CSV (multipart POST)
///
/// /import/template                          CSV template download
/// /import/{session_id}                      session preview
/// /import/{session_id}/confirm              store the batch (POST)
/// /import/{session_id}/cancel               discard the session (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/shelters", shelters::router())
        .nest("/import", importer::router())
}
