//! Pet domain model shared by the importer, the repositories and the API.
//!
//! Enumerations carry two spellings: a stable lowercase storage code
//! (`as_str`, also the serde representation) and the Slovak display value
//! shown to operators and used in CSV files (`display_name`).

use serde::{Deserialize, Serialize};

// ── Enumerations ─────────────────────────────────────────────────────

/// Species of an animal listed for adoption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetType {
    #[default]
    Dog,
    Cat,
    Other,
}

impl PetType {
    pub const ALL: [PetType; 3] = [Self::Dog, Self::Cat, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Dog => "Pes",
            Self::Cat => "Mačka",
            Self::Other => "Iné",
        }
    }

    /// Exact (case- and accent-sensitive) match against the display values.
    pub fn from_display(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.display_name() == value)
    }

    pub fn from_display_or_default(value: &str) -> Self {
        Self::from_display(value).unwrap_or_default()
    }
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Self::Male, Self::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Male => "Samec",
            Self::Female => "Samica",
        }
    }

    pub fn from_display(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.display_name() == value)
    }

    pub fn from_display_or_default(value: &str) -> Self {
        Self::from_display(value).unwrap_or_default()
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PetSize {
    pub const ALL: [PetSize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Small => "Malý",
            Self::Medium => "Stredný",
            Self::Large => "Veľký",
        }
    }

    pub fn from_display(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.display_name() == value)
    }

    pub fn from_display_or_default(value: &str) -> Self {
        Self::from_display(value).unwrap_or_default()
    }
}

impl std::fmt::Display for PetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Adoption status of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetStatus {
    #[default]
    Available,
    Reserved,
    Adopted,
}

impl PetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Adopted => "adopted",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Available => "Dostupný",
            Self::Reserved => "Rezervovaný",
            Self::Adopted => "Adoptovaný",
        }
    }
}

impl std::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// ── Nested records ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthFlags {
    pub vaccinated: bool,
    pub neutered: bool,
    pub dewormed: bool,
    pub chipped: bool,
}

/// How the animal gets along with children and other animals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialCompatibility {
    pub good_with_children: bool,
    pub good_with_dogs: bool,
    pub good_with_cats: bool,
}

/// Not part of the import file; shelters fill it in later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Training {
    pub house_trained: bool,
    pub leash_trained: bool,
    pub knows_basic_commands: bool,
}

/// Expectations placed on an adopter. Not part of the import file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub experienced_owner: bool,
    pub garden_required: bool,
    pub other_pets_allowed: bool,
}

// ── Partial pet record ───────────────────────────────────────────────

/// A pet awaiting persistence: everything except the id, the owning
/// shelter and the timestamps, which the storage layer assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    pub pet_type: PetType,
    pub breed: String,
    pub age: i32,
    pub gender: Gender,
    pub size: PetSize,
    pub description: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub health: HealthFlags,
    pub social: SocialCompatibility,
    pub training: Training,
    pub requirements: Requirements,
    pub tags: Vec<String>,
    pub is_visible: bool,
    pub status: PetStatus,
    pub views: i32,
}

impl NewPet {
    /// A record with the listing defaults applied: visible, available,
    /// untagged, never viewed.
    pub fn new(name: impl Into<String>, pet_type: PetType) -> Self {
        Self {
            name: name.into(),
            pet_type,
            breed: String::new(),
            age: 0,
            gender: Gender::default(),
            size: PetSize::default(),
            description: String::new(),
            image_url: None,
            location: None,
            health: HealthFlags::default(),
            social: SocialCompatibility::default(),
            training: Training::default(),
            requirements: Requirements::default(),
            tags: Vec::new(),
            is_visible: true,
            status: PetStatus::default(),
            views: 0,
        }
    }

    /// Whether the record still lacks a usable location.
    pub fn is_missing_location(&self) -> bool {
        self.location
            .as_deref()
            .map_or(true, |loc| loc.trim().is_empty())
    }
}
