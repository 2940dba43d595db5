//! Column headers of the pet import file.
//!
//! Headers are matched exactly; a file using `meno` or `Veľkosť` instead of
//! `Meno` / `Velkost` simply has those columns missing.

pub const NAME: &str = "Meno";
pub const TYPE: &str = "Druh";
pub const BREED: &str = "Plemeno";
pub const AGE: &str = "Vek";
pub const GENDER: &str = "Pohlavie";
pub const SIZE: &str = "Velkost";
pub const DESCRIPTION: &str = "Popis";
pub const IMAGE: &str = "Obrazok";
pub const VACCINATED: &str = "Ockovany";
pub const NEUTERED: &str = "Kastrovany";
pub const DEWORMED: &str = "Odcrevneny";
pub const CHIPPED: &str = "Cipovany";
pub const GOOD_WITH_CHILDREN: &str = "Znasanlivost_deti";
pub const GOOD_WITH_DOGS: &str = "Znasanlivost_psy";
pub const GOOD_WITH_CATS: &str = "Znasanlivost_macka";

/// Every known column in template order.
pub const ALL_COLUMNS: &[&str] = &[
    NAME,
    TYPE,
    BREED,
    AGE,
    GENDER,
    SIZE,
    DESCRIPTION,
    IMAGE,
    VACCINATED,
    NEUTERED,
    DEWORMED,
    CHIPPED,
    GOOD_WITH_CHILDREN,
    GOOD_WITH_DOGS,
    GOOD_WITH_CATS,
];

/// Placeholder breed for rows that leave `Plemeno` blank.
pub const DEFAULT_BREED: &str = "Neznáme";

/// Placeholder description for rows that leave `Popis` blank.
pub const DEFAULT_DESCRIPTION: &str = "Bez popisu";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_order_starts_with_required_columns() {
        assert_eq!(&ALL_COLUMNS[..2], [NAME, TYPE]);
        let mut unique = ALL_COLUMNS.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), ALL_COLUMNS.len());
    }
}
