//! Route definitions for the bulk pet importer, mounted at `/import`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::importer;
use crate::state::AppState;

/// Routes mounted at `/import`.
///
/// ```text
/// GET    /template        -> download_template
/// GET    /{id}            -> get_import_session
/// POST   /{id}/confirm    -> confirm_import
/// POST   /{id}/cancel     -> cancel_import
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/template", get(importer::download_template))
        .route("/{id}", get(importer::get_import_session))
        .route("/{id}/confirm", post(importer::confirm_import))
        .route("/{id}/cancel", post(importer::cancel_import))
}
