//! Models for the `pets` table.
//!
//! Nested pet attributes are stored as JSONB and decoded straight into the
//! core types; enumerations are stored as their lowercase storage codes.

use labka_core::pet::{HealthFlags, Requirements, SocialCompatibility, Training};
use labka_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `pets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pet {
    pub id: DbId,
    pub shelter_id: DbId,
    pub name: String,
    pub pet_type: String,
    pub breed: String,
    pub age: i32,
    pub gender: String,
    pub size: String,
    pub description: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub health: Json<HealthFlags>,
    pub social: Json<SocialCompatibility>,
    pub training: Json<Training>,
    pub requirements: Json<Requirements>,
    pub tags: Vec<String>,
    pub is_visible: bool,
    pub status: String,
    pub views: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
