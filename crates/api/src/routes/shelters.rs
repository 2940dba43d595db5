//! Route definitions for shelters, mounted at `/shelters`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{importer, shelters};
use crate::state::AppState;

/// Routes mounted at `/shelters`.
///
/// ```text
/// POST   /                -> create_shelter
/// GET    /{id}            -> get_shelter
/// GET    /{id}/pets       -> list_shelter_pets
/// POST   /{id}/import     -> upload_import (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(shelters::create_shelter))
        .route("/{id}", get(shelters::get_shelter))
        .route("/{id}/pets", get(shelters::list_shelter_pets))
        .route("/{id}/import", post(importer::upload_import))
}
