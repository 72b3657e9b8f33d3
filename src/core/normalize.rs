//! Field normalizers: raw source scalars to output cell text.

use serde_json::Value;

/// String form of a scalar; `None` for absent or null values.
fn scalar_text(raw: Option<&Value>) -> Option<String> {
    match raw? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Decimal digits in any script, e.g. ASCII `0-9` or Arabic-Indic `٠-٩`.
///
/// `to_digit` only knows ASCII, so non-ASCII numerics are accepted when they
/// are not also letters; fractions and roman numerals are excluded.
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
        || (!c.is_ascii() && c.is_numeric() && !c.is_alphabetic() && !is_vulgar_fraction(c))
}

fn is_vulgar_fraction(c: char) -> bool {
    matches!(c, '\u{00BC}'..='\u{00BE}' | '\u{2150}'..='\u{215F}' | '\u{2189}')
}

/// Formats 10-digit phone numbers as `AAA-BBB-CCCC`.
///
/// Anything else comes back trimmed but otherwise untouched; this is a
/// formatting pass, not a validator.
pub fn normalize_phone(raw: Option<&Value>) -> String {
    let Some(text) = scalar_text(raw) else {
        return String::new();
    };

    let trimmed = text.trim();
    let digits: Vec<char> = trimmed.chars().filter(|c| is_decimal_digit(*c)).collect();

    if digits.len() == 10 {
        let group = |range: std::ops::Range<usize>| digits[range].iter().collect::<String>();
        format!("{}-{}-{}", group(0..3), group(3..6), group(6..10))
    } else {
        trimmed.to_string()
    }
}

pub fn normalize_text(raw: Option<&Value>) -> String {
    scalar_text(raw)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Case-insensitive, whitespace-tolerant comparison of a flag cell.
pub fn normalize_flag(raw: Option<&Value>, match_value: &str) -> bool {
    scalar_text(raw)
        .map(|text| text.trim().to_uppercase() == match_value.trim().to_uppercase())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn phone(raw: &str) -> String {
        normalize_phone(Some(&json!(raw)))
    }

    #[test]
    fn test_phone_groups_ten_digits() {
        assert_eq!(phone("5551234567"), "555-123-4567");
        assert_eq!(phone("(555) 123-4567"), "555-123-4567");
        assert_eq!(phone("  555.123.4567 "), "555-123-4567");
    }

    #[test]
    fn test_phone_accepts_numeric_values() {
        assert_eq!(normalize_phone(Some(&json!(5551234567u64))), "555-123-4567");
    }

    #[test]
    fn test_phone_passes_through_other_digit_counts() {
        assert_eq!(phone("12345"), "12345");
        assert_eq!(phone("123-456-78901"), "123-456-78901");
        assert_eq!(phone(" 1-555-123-4567 "), "1-555-123-4567");
        assert_eq!(phone("call after 5pm"), "call after 5pm");
        assert_eq!(phone("   "), "");
    }

    #[test]
    fn test_phone_counts_non_ascii_digits() {
        assert_eq!(phone("٥٥٥١٢٣٤٥٦٧"), "٥٥٥-١٢٣-٤٥٦٧");
        assert_eq!(phone("(٥٥٥) ١٢٣-٤٥٦٧"), "٥٥٥-١٢٣-٤٥٦٧");
        assert_eq!(phone("５５５１２３４５６７"), "５５５-１２３-４５６７");
        // Fractions and roman numerals are not digits.
        assert_eq!(phone("555123456½"), "555123456½");
        assert_eq!(phone("555123456Ⅻ"), "555123456Ⅻ");
    }

    #[test]
    fn test_phone_is_idempotent() {
        for raw in ["5551234567", "12345", "555 123 4567 ext", "+44 20 7946 0958", ""] {
            let once = phone(raw);
            assert_eq!(phone(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_phone_digit_grouping_for_any_ten_digits() {
        for seed in [0u64, 1234567890, 9999999999, 4045550123, 1000000001] {
            let d = format!("{:010}", seed);
            let expected = format!("{}-{}-{}", &d[0..3], &d[3..6], &d[6..10]);
            assert_eq!(phone(&d), expected);
        }
    }

    #[test]
    fn test_absent_values_become_empty() {
        assert_eq!(normalize_phone(None), "");
        assert_eq!(normalize_phone(Some(&Value::Null)), "");
        assert_eq!(normalize_text(None), "");
        assert_eq!(normalize_text(Some(&Value::Null)), "");
    }

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(normalize_text(Some(&json!("  Springfield \t"))), "Springfield");
        assert_eq!(normalize_text(Some(&json!(62704))), "62704");
    }

    #[test]
    fn test_flag_matching() {
        assert!(normalize_flag(Some(&json!("X")), "X"));
        assert!(normalize_flag(Some(&json!(" x ")), "X"));
        assert!(!normalize_flag(Some(&json!("Y")), "X"));
        assert!(!normalize_flag(Some(&json!("")), "X"));
        assert!(!normalize_flag(None, "X"));
    }
}
