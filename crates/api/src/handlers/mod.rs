pub mod importer;
pub mod shelters;
