//! Repository for the `shelters` table.

use labka_core::types::DbId;
use sqlx::PgPool;

use crate::models::shelter::{CreateShelter, Shelter};

/// Column list for the `shelters` table.
const COLUMNS: &str = "id, name, location, email, created_at, updated_at";

/// Provides CRUD operations for shelters.
pub struct ShelterRepo;

impl ShelterRepo {
    /// Register a new shelter.
    pub async fn create(pool: &PgPool, input: &CreateShelter) -> Result<Shelter, sqlx::Error> {
        let query = format!(
            "INSERT INTO shelters (name, location, email) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shelter>(&query)
            .bind(input.name.trim())
            .bind(input.location.trim())
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a shelter by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Shelter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shelters WHERE id = $1");
        sqlx::query_as::<_, Shelter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a shelter and, by cascade, its pets. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shelters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
