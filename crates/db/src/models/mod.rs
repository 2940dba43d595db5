pub mod pet;
pub mod shelter;
