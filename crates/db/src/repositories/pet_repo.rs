//! Repository for the `pets` table.

use labka_core::pet::NewPet;
use labka_core::types::DbId;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::pet::Pet;

/// Column list for the `pets` table.
const COLUMNS: &str = "id, shelter_id, name, pet_type, breed, age, gender, size, description, \
    image_url, location, health, social, training, requirements, tags, is_visible, status, \
    views, created_at, updated_at";

/// Provides CRUD operations for pets.
pub struct PetRepo;

impl PetRepo {
    /// Insert a whole batch of pets for one shelter in a single transaction.
    ///
    /// Either every row is inserted or none is: the first failing insert
    /// rolls the transaction back when it is dropped.
    pub async fn batch_create(
        pool: &PgPool,
        shelter_id: DbId,
        pets: &[NewPet],
    ) -> Result<Vec<Pet>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let mut created = Vec::with_capacity(pets.len());
        for pet in pets {
            created.push(Self::insert_inner(&mut tx, shelter_id, pet).await?);
        }

        tx.commit().await?;
        tracing::debug!(shelter_id, count = created.len(), "Inserted pet batch");
        Ok(created)
    }

    /// Find a pet by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a shelter's pets, oldest first.
    pub async fn list_by_shelter(pool: &PgPool, shelter_id: DbId) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE shelter_id = $1 ORDER BY id");
        sqlx::query_as::<_, Pet>(&query)
            .bind(shelter_id)
            .fetch_all(pool)
            .await
    }

    /// Count a shelter's pets.
    pub async fn count_by_shelter(pool: &PgPool, shelter_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pets WHERE shelter_id = $1")
            .bind(shelter_id)
            .fetch_one(pool)
            .await
    }

    async fn insert_inner(
        tx: &mut Transaction<'_, Postgres>,
        shelter_id: DbId,
        pet: &NewPet,
    ) -> Result<Pet, sqlx::Error> {
        let query = format!(
            "INSERT INTO pets \
                (shelter_id, name, pet_type, breed, age, gender, size, description, \
                 image_url, location, health, social, training, requirements, tags, \
                 is_visible, status, views) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, \
                     $16, $17, $18) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(shelter_id)
            .bind(&pet.name)
            .bind(pet.pet_type.as_str())
            .bind(&pet.breed)
            .bind(pet.age)
            .bind(pet.gender.as_str())
            .bind(pet.size.as_str())
            .bind(&pet.description)
            .bind(&pet.image_url)
            .bind(&pet.location)
            .bind(Json(&pet.health))
            .bind(Json(&pet.social))
            .bind(Json(&pet.training))
            .bind(Json(&pet.requirements))
            .bind(&pet.tags)
            .bind(pet.is_visible)
            .bind(pet.status.as_str())
            .bind(pet.views)
            .fetch_one(&mut **tx)
            .await
    }
}
