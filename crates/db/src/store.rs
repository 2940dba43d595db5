//! PostgreSQL implementation of the importer's persistence boundary.

use async_trait::async_trait;
use labka_core::importer::PetStore;
use labka_core::pet::NewPet;
use labka_core::types::DbId;

use crate::repositories::PetRepo;
use crate::DbPool;

/// Stores imported pets with [`PetRepo::batch_create`], so a batch is
/// committed all-or-nothing.
#[derive(Debug, Clone)]
pub struct PgPetStore {
    pool: DbPool,
}

impl PgPetStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PetStore for PgPetStore {
    type Error = sqlx::Error;

    async fn create_pets(&self, shelter_id: DbId, pets: &[NewPet]) -> Result<usize, sqlx::Error> {
        let created = PetRepo::batch_create(&self.pool, shelter_id, pets).await?;
        Ok(created.len())
    }
}
