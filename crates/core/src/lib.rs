//! Domain types and pure import logic for the Labka adoption backend.
//!
//! Nothing in this crate touches the database or the network directly; the
//! persistence boundary is reached through the [`importer::PetStore`] trait.

pub mod error;
pub mod importer;
pub mod pet;
pub mod types;
