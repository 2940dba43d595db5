//! Maps an import file onto [`NewPet`] records.
//!
//! A single pass over the rows produces the accepted records and a list of
//! human-readable row errors. Row errors never stop the pass; only a file
//! the CSV reader cannot get through yields an empty result with the
//! reader's message as the sole error.

use std::collections::HashMap;
use std::io::Read;

use csv::{ByteRecord, ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

use super::coerce::{optional_text, parse_age, parse_bool, text_or};
use super::schema;
use crate::pet::{
    Gender, HealthFlags, NewPet, PetSize, PetType, SocialCompatibility,
};

/// Header row plus zero-based indexing.
const ROW_NUMBER_OFFSET: usize = 2;

/// Output of one parse: accepted records and row-level error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportParse {
    pub data: Vec<NewPet>,
    pub errors: Vec<String>,
}

impl ImportParse {
    fn failed(message: String) -> Self {
        Self {
            data: Vec::new(),
            errors: vec![message],
        }
    }
}

/// Why a single row was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowError {
    MissingRequired,
    InvalidData,
}

impl RowError {
    fn message(self, row_number: usize) -> String {
        match self {
            Self::MissingRequired => format!("Riadok {row_number}: Chýba Meno alebo Druh"),
            Self::InvalidData => format!("Riadok {row_number}: Chyba pri spracovaní dát"),
        }
    }
}

/// Parse an import file from any reader.
pub fn parse_pet_csv<R: Read>(input: R) -> ImportParse {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let columns = match reader.headers() {
        Ok(headers) => ColumnIndex::new(headers),
        Err(e) => return ImportParse::failed(e.to_string()),
    };

    let mut parsed = ImportParse::default();

    for (index, record) in reader.byte_records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => return ImportParse::failed(e.to_string()),
        };

        match map_row(&columns, &record) {
            Ok(pet) => parsed.data.push(pet),
            Err(err) => parsed
                .errors
                .push(err.message(index + ROW_NUMBER_OFFSET)),
        }
    }

    parsed
}

/// Parse an import file already held in memory.
pub fn parse_pet_csv_bytes(bytes: &[u8]) -> ImportParse {
    parse_pet_csv(bytes)
}

// ── Row mapping ──────────────────────────────────────────────────────

/// Header name to field position. The first occurrence of a repeated
/// header wins.
struct ColumnIndex(HashMap<String, usize>);

impl ColumnIndex {
    fn new(headers: &StringRecord) -> Self {
        let mut positions = HashMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            positions.entry(name.to_string()).or_insert(i);
        }
        Self(positions)
    }

    /// The raw cell for `column`, `None` when the column or the cell is
    /// absent.
    fn cell<'r>(&self, record: &'r ByteRecord, column: &str) -> Result<Option<&'r str>, RowError> {
        let Some(bytes) = self.0.get(column).and_then(|&i| record.get(i)) else {
            return Ok(None);
        };
        std::str::from_utf8(bytes)
            .map(Some)
            .map_err(|_| RowError::InvalidData)
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Map one data row. `Meno` and `Druh` must be present and non-blank after
/// trimming: a cell holding only whitespace counts as missing, not just an
/// empty or absent one.
fn map_row(columns: &ColumnIndex, record: &ByteRecord) -> Result<NewPet, RowError> {
    let name = columns.cell(record, schema::NAME)?;
    let pet_type = columns.cell(record, schema::TYPE)?;
    if is_blank(name) || is_blank(pet_type) {
        return Err(RowError::MissingRequired);
    }

    let cell = |column: &str| columns.cell(record, column);
    let flag = |column: &str| cell(column).map(parse_bool);

    let mut pet = NewPet::new(
        text_or(name, ""),
        PetType::from_display_or_default(pet_type.unwrap_or_default().trim()),
    );
    pet.breed = text_or(cell(schema::BREED)?, schema::DEFAULT_BREED);
    pet.age = parse_age(cell(schema::AGE)?);
    pet.gender = Gender::from_display_or_default(cell(schema::GENDER)?.unwrap_or_default().trim());
    pet.size = PetSize::from_display_or_default(cell(schema::SIZE)?.unwrap_or_default().trim());
    pet.description = text_or(cell(schema::DESCRIPTION)?, schema::DEFAULT_DESCRIPTION);
    pet.image_url = optional_text(cell(schema::IMAGE)?);
    pet.health = HealthFlags {
        vaccinated: flag(schema::VACCINATED)?,
        neutered: flag(schema::NEUTERED)?,
        dewormed: flag(schema::DEWORMED)?,
        chipped: flag(schema::CHIPPED)?,
    };
    pet.social = SocialCompatibility {
        good_with_children: flag(schema::GOOD_WITH_CHILDREN)?,
        good_with_dogs: flag(schema::GOOD_WITH_DOGS)?,
        good_with_cats: flag(schema::GOOD_WITH_CATS)?,
    };

    Ok(pet)
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Meno,Druh,Plemeno,Vek,Pohlavie,Velkost,Popis,Obrazok,Ockovany,\
                          Kastrovany,Odcrevneny,Cipovany,Znasanlivost_deti,Znasanlivost_psy,\
                          Znasanlivost_macka";

    fn csv(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out.push('\n');
        out
    }

    #[test]
    fn maps_a_complete_row() {
        let input = csv(&[
            " Rex ,Pes, Labrador ,4,Samec,Veľký, Hravý ,https://x/rex.jpg,áno,nie,1,yes,true,ano,0",
        ]);
        let parsed = parse_pet_csv_bytes(input.as_bytes());

        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.data.len(), 1);
        let pet = &parsed.data[0];
        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.pet_type, PetType::Dog);
        assert_eq!(pet.breed, "Labrador");
        assert_eq!(pet.age, 4);
        assert_eq!(pet.gender, Gender::Male);
        assert_eq!(pet.size, PetSize::Large);
        assert_eq!(pet.description, "Hravý");
        assert_eq!(pet.image_url.as_deref(), Some("https://x/rex.jpg"));
        assert_eq!(
            pet.health,
            HealthFlags {
                vaccinated: true,
                neutered: false,
                dewormed: true,
                chipped: true,
            }
        );
        assert!(pet.social.good_with_children);
        assert!(pet.social.good_with_dogs);
        assert!(!pet.social.good_with_cats);
        assert!(pet.location.is_none());
        assert!(pet.is_visible);
    }

    #[test]
    fn scenario_missing_name_in_middle_row() {
        let input = csv(&[
            "Rex,Pes,Labrador,3,Samec,Veľký,Pes,,,,,,,,",
            ",Pes,Bígl,2,Samica,Malý,Bez mena,,,,,,,,",
            "Micka,Mačka,,1,Samica,Malý,,,,,,,,,",
        ]);
        let parsed = parse_pet_csv_bytes(input.as_bytes());

        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.errors, vec!["Riadok 3: Chýba Meno alebo Druh".to_string()]);
        assert_eq!(parsed.data[0].name, "Rex");
        assert_eq!(parsed.data[1].name, "Micka");
        assert_eq!(parsed.data[1].pet_type, PetType::Cat);
    }

    #[test]
    fn missing_type_is_rejected_with_row_number() {
        let input = csv(&["Rex,,Labrador,3,Samec,Veľký,Pes,,,,,,,,"]);
        let parsed = parse_pet_csv_bytes(input.as_bytes());

        assert!(parsed.data.is_empty());
        assert_eq!(parsed.errors, vec!["Riadok 2: Chýba Meno alebo Druh".to_string()]);
    }

    #[test]
    fn whitespace_only_name_counts_as_missing() {
        let input = csv(&["   ,Pes,,,,,,,,,,,,,"]);
        let parsed = parse_pet_csv_bytes(input.as_bytes());
        assert!(parsed.data.is_empty());
        assert_eq!(parsed.errors.len(), 1);
    }

    #[test]
    fn header_only_file_is_empty() {
        let parsed = parse_pet_csv_bytes(format!("{HEADER}\n").as_bytes());
        assert!(parsed.data.is_empty());
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn empty_input_is_empty() {
        let parsed = parse_pet_csv_bytes(b"");
        assert_eq!(parsed, ImportParse::default());
    }

    #[test]
    fn blank_lines_produce_nothing_and_do_not_shift_numbering() {
        let input = format!("{HEADER}\n\nRex,Pes\n\n\n,Pes\n");
        let parsed = parse_pet_csv_bytes(input.as_bytes());

        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.errors, vec!["Riadok 3: Chýba Meno alebo Druh".to_string()]);
    }

    #[test]
    fn short_rows_and_missing_columns_use_defaults() {
        let parsed = parse_pet_csv_bytes("Meno,Druh\nLuna,Iné\n".as_bytes());

        assert!(parsed.errors.is_empty());
        let pet = &parsed.data[0];
        assert_eq!(pet.pet_type, PetType::Other);
        assert_eq!(pet.breed, "Neznáme");
        assert_eq!(pet.description, "Bez popisu");
        assert_eq!(pet.age, 0);
        assert_eq!(pet.gender, Gender::Male);
        assert_eq!(pet.size, PetSize::Medium);
        assert!(pet.image_url.is_none());
        assert_eq!(pet.health, HealthFlags::default());
    }

    #[test]
    fn garbage_enum_and_age_values_fall_back() {
        let input = csv(&["Bobo,Papagáj,,staručký,Kocúr,obrovský,,,,,,,,,"]);
        let parsed = parse_pet_csv_bytes(input.as_bytes());

        assert!(parsed.errors.is_empty());
        let pet = &parsed.data[0];
        assert_eq!(pet.pet_type, PetType::Dog);
        assert_eq!(pet.gender, Gender::Male);
        assert_eq!(pet.size, PetSize::Medium);
        assert_eq!(pet.age, 0);
    }

    #[test]
    fn header_matching_is_exact() {
        let parsed = parse_pet_csv_bytes("meno,Druh\nRex,Pes\n".as_bytes());
        assert!(parsed.data.is_empty());
        assert_eq!(parsed.errors, vec!["Riadok 2: Chýba Meno alebo Druh".to_string()]);
    }

    #[test]
    fn invalid_utf8_row_is_skipped_with_data_error() {
        let mut input = b"Meno,Druh,Popis\nRex,Pes,ok\nAzor,Pes,".to_vec();
        input.extend_from_slice(&[0xff, 0xfe]);
        input.extend_from_slice(b"\nMicka,Ma\xc4\x8dka,ok\n");
        let parsed = parse_pet_csv_bytes(&input);

        assert_eq!(parsed.data.len(), 2);
        assert_eq!(
            parsed.errors,
            vec!["Riadok 3: Chyba pri spracovaní dát".to_string()]
        );
        assert_eq!(parsed.data[1].pet_type, PetType::Cat);
    }

    #[test]
    fn unreadable_header_fails_the_whole_file() {
        let parsed = parse_pet_csv_bytes(b"Meno,\xff\xfe\nRex,Pes\n");
        assert!(parsed.data.is_empty());
        assert_eq!(parsed.errors.len(), 1);
        assert!(!parsed.errors[0].starts_with("Riadok"));
    }

    #[test]
    fn parsing_is_idempotent() {
        let input = csv(&[
            "Rex,Pes,Labrador,3,Samec,Veľký,Pes,,áno,,,,,,",
            ",Mačka,,,,,,,,,,,,,",
            "Micka,Mačka,,1,Samica,Malý,,,,,,,,,",
        ]);
        let first = parse_pet_csv_bytes(input.as_bytes());
        let second = parse_pet_csv_bytes(input.as_bytes());
        assert_eq!(first, second);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let input = csv(&["Rex,Pes,Labrador,3,Samec,Veľký,\"Milý, pokojný\",,,,,,,,"]);
        let parsed = parse_pet_csv_bytes(input.as_bytes());
        assert_eq!(parsed.data[0].description, "Milý, pokojný");
    }
}
