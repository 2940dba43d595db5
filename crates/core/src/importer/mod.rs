//! Bulk pet importer: CSV parsing and field mapping, the import dialog
//! state machine, and batch submission to the persistence boundary.
//!
//! - [`schema`] holds the fixed column headers of the import file.
//! - [`coerce`] turns raw cell text into typed values (total functions).
//! - [`parser`] maps a whole file into records plus per-row errors.
//! - [`session`] tracks one operator's import from upload to commit.
//! - [`submit`] enriches a batch and hands it to a [`PetStore`].

pub mod coerce;
pub mod parser;
pub mod schema;
pub mod session;
pub mod submit;

pub use parser::{parse_pet_csv, parse_pet_csv_bytes, ImportParse};
pub use session::{ImportFlow, ImportSnapshot, ImportStep};
pub use submit::{enrich_locations, run_import, submit_batch, PetStore};

// ── Messages ─────────────────────────────────────────────────────────

/// Shown when the uploaded file is not a CSV file.
pub const INVALID_FILE_TYPE_MESSAGE: &str = "Prosím, nahrajte súbor vo formáte CSV";

/// Prefix put in front of the storage layer's message when a batch fails.
pub const SUBMIT_ERROR_PREFIX: &str = "Chyba pri importe: ";

/// MIME type accepted for uploads.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Returns `true` if an upload looks like a CSV file, judged by its MIME
/// type or its file name. The extension comparison ignores case.
pub fn is_csv_upload(file_name: &str, content_type: Option<&str>) -> bool {
    let mime_ok = content_type
        .map(|ct| {
            ct.split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .eq_ignore_ascii_case(CSV_CONTENT_TYPE)
        })
        .unwrap_or(false);

    mime_ok || file_name.to_ascii_lowercase().ends_with(".csv")
}

/// A ready-to-fill import file: the header row and one example animal.
pub fn template_csv() -> String {
    let header = schema::ALL_COLUMNS.join(",");
    let example = [
        "Rex",
        "Pes",
        "Labrador",
        "3",
        "Samec",
        "Veľký",
        "Priateľský a hravý pes",
        "https://example.com/rex.jpg",
        "áno",
        "áno",
        "áno",
        "áno",
        "áno",
        "áno",
        "nie",
    ]
    .join(",");
    format!("{header}\n{example}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_accepted_by_mime_type() {
        assert!(is_csv_upload("export", Some("text/csv")));
        assert!(is_csv_upload("export", Some("text/csv; charset=utf-8")));
    }

    #[test]
    fn csv_accepted_by_extension() {
        assert!(is_csv_upload("zvierata.csv", None));
        assert!(is_csv_upload("ZVIERATA.CSV", Some("application/octet-stream")));
    }

    #[test]
    fn other_files_rejected() {
        assert!(!is_csv_upload("zvierata.xlsx", Some("application/vnd.ms-excel")));
        assert!(!is_csv_upload("photo.png", Some("image/png")));
        assert!(!is_csv_upload("csv", None));
    }

    #[test]
    fn template_parses_into_one_record() {
        let parsed = parse_pet_csv_bytes(template_csv().as_bytes());
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].name, "Rex");
        assert!(!parsed.data[0].social.good_with_cats);
    }
}
