//! Models for the `shelters` table.

use labka_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `shelters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shelter {
    pub id: DbId,
    pub name: String,
    /// Registered location; used as the fallback location of imported pets.
    pub location: String,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a shelter.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateShelter {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    #[validate(email)]
    pub email: Option<String>,
}
