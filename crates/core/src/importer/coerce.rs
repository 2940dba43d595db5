//! Cell coercion for the import file. Every function here is total: bad
//! input degrades to a default instead of failing the row.

/// Tokens (compared after trimming and lowercasing) that read as `true`.
pub const TRUTHY_TOKENS: &[&str] = &["áno", "ano", "yes", "true", "1"];

/// Interpret a yes/no cell. Anything outside [`TRUTHY_TOKENS`] is `false`.
pub fn parse_bool(value: Option<&str>) -> bool {
    value
        .map(|v| v.trim().to_lowercase())
        .is_some_and(|v| TRUTHY_TOKENS.contains(&v.as_str()))
}

/// Read the leading integer of a cell, so `"3 roky"` gives `3`.
///
/// Missing, non-numeric and out-of-range values give `0`.
pub fn parse_age(value: Option<&str>) -> i32 {
    let Some(raw) = value.map(str::trim) else {
        return 0;
    };

    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }

    match digits[..end].parse::<i32>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) => 0,
    }
}

/// Trimmed cell text, or `default` when the cell is blank or missing.
pub fn text_or(value: Option<&str>, default: &str) -> String {
    optional_text(value).unwrap_or_else(|| default.to_string())
}

/// Trimmed cell text, or `None` when the cell is blank or missing.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_tokens_ignore_case() {
        for v in ["Áno", "ano", "YES", "1", "true", " áno "] {
            assert!(parse_bool(Some(v)), "value: {v:?}");
        }
    }

    #[test]
    fn everything_else_is_false() {
        for v in ["", "nie", "2", "no", "false", "y"] {
            assert!(!parse_bool(Some(v)), "value: {v:?}");
        }
        assert!(!parse_bool(None));
    }

    #[test]
    fn age_reads_leading_integer() {
        assert_eq!(parse_age(Some("4")), 4);
        assert_eq!(parse_age(Some(" 12 ")), 12);
        assert_eq!(parse_age(Some("3 roky")), 3);
        assert_eq!(parse_age(Some("2.5")), 2);
        assert_eq!(parse_age(Some("+7")), 7);
    }

    #[test]
    fn age_defaults_to_zero() {
        assert_eq!(parse_age(None), 0);
        assert_eq!(parse_age(Some("")), 0);
        assert_eq!(parse_age(Some("mladý")), 0);
        assert_eq!(parse_age(Some("-")), 0);
        assert_eq!(parse_age(Some("99999999999")), 0);
    }

    #[test]
    fn text_helpers_trim_and_default() {
        assert_eq!(text_or(Some("  Labrador "), "Neznáme"), "Labrador");
        assert_eq!(text_or(Some("   "), "Neznáme"), "Neznáme");
        assert_eq!(text_or(None, "Bez popisu"), "Bez popisu");
        assert_eq!(optional_text(Some(" ")), None);
        assert_eq!(optional_text(Some(" a.jpg")), Some("a.jpg".to_string()));
    }
}
