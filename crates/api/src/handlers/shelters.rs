//! Handlers for shelters and their pet listings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use labka_core::error::CoreError;
use labka_core::types::DbId;
use labka_db::models::pet::Pet;
use labka_db::models::shelter::{CreateShelter, Shelter};
use labka_db::repositories::{PetRepo, ShelterRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/shelters
pub async fn create_shelter(
    State(state): State<AppState>,
    Json(input): Json<CreateShelter>,
) -> AppResult<(StatusCode, Json<DataResponse<Shelter>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let shelter = ShelterRepo::create(&state.pool, &input).await?;
    tracing::info!(shelter_id = shelter.id, name = %shelter.name, "Shelter registered");

    Ok((StatusCode::CREATED, Json(DataResponse { data: shelter })))
}

/// GET /api/v1/shelters/{id}
pub async fn get_shelter(
    State(state): State<AppState>,
    Path(shelter_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Shelter>>> {
    let shelter = find_shelter(&state, shelter_id).await?;
    Ok(Json(DataResponse { data: shelter }))
}

/// GET /api/v1/shelters/{id}/pets
///
/// The shelter's listing, refreshed by clients after a bulk import.
pub async fn list_shelter_pets(
    State(state): State<AppState>,
    Path(shelter_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Pet>>>> {
    find_shelter(&state, shelter_id).await?;
    let pets = PetRepo::list_by_shelter(&state.pool, shelter_id).await?;
    Ok(Json(DataResponse { data: pets }))
}

/// Load a shelter or fail with a 404.
pub(crate) async fn find_shelter(state: &AppState, shelter_id: DbId) -> AppResult<Shelter> {
    ShelterRepo::find_by_id(&state.pool, shelter_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Shelter",
            id: shelter_id,
        }))
}
