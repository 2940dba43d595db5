//! Repository layer: one zero-sized struct per table.

mod pet_repo;
mod shelter_repo;

pub use pet_repo::PetRepo;
pub use shelter_repo::ShelterRepo;
