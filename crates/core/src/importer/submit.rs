//! Batch submission of imported pets to the persistence boundary.
//!
//! The batch is sent in one call. There is no retry, no chunking and no
//! partial success: either the store accepts every record or the whole
//! import is reported as failed.

use async_trait::async_trait;

use super::session::ImportFlow;
use super::SUBMIT_ERROR_PREFIX;
use crate::error::CoreError;
use crate::pet::NewPet;
use crate::types::DbId;

/// The storage side of a bulk import.
///
/// Implementations own atomicity and authorisation; callers treat the
/// call as opaque and only look at success or the error message.
#[async_trait]
pub trait PetStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create every record for `shelter_id`, returning how many were stored.
    async fn create_pets(&self, shelter_id: DbId, pets: &[NewPet]) -> Result<usize, Self::Error>;
}

/// Fill in `location` on records that have none. Records that already
/// name a location are left alone. A blank default changes nothing.
pub fn enrich_locations(records: &mut [NewPet], default_location: &str) {
    let default_location = default_location.trim();
    if default_location.is_empty() {
        return;
    }
    for record in records.iter_mut().filter(|r| r.is_missing_location()) {
        record.location = Some(default_location.to_string());
    }
}

/// Enrich `records` and store them as one batch.
///
/// A store failure becomes [`CoreError::ImportFailed`] carrying the
/// store's message behind [`SUBMIT_ERROR_PREFIX`].
pub async fn submit_batch<S>(
    store: &S,
    shelter_id: DbId,
    mut records: Vec<NewPet>,
    default_location: &str,
) -> Result<usize, CoreError>
where
    S: PetStore + ?Sized,
{
    enrich_locations(&mut records, default_location);

    match store.create_pets(shelter_id, &records).await {
        Ok(created) => {
            tracing::info!(shelter_id, created, "Bulk pet import stored");
            Ok(created)
        }
        Err(e) => {
            tracing::warn!(shelter_id, records = records.len(), error = %e, "Bulk pet import failed");
            Err(CoreError::ImportFailed(format!("{SUBMIT_ERROR_PREFIX}{e}")))
        }
    }
}

/// Drive a previewed flow through submission when the caller owns the
/// flow for the whole call.
///
/// On failure the flow is back in `preview` with the banner set and the
/// same error is returned.
pub async fn run_import<S>(flow: &mut ImportFlow, store: &S) -> Result<usize, CoreError>
where
    S: PetStore + ?Sized,
{
    let records = flow.begin_upload()?;
    let default_location = flow.default_location().to_string();

    match submit_batch(store, flow.shelter_id(), records, &default_location).await {
        Ok(created) => {
            flow.complete_upload(created);
            Ok(created)
        }
        Err(e) => {
            flow.fail_upload(e.to_string());
            Err(e)
        }
    }
}
