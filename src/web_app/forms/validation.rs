// web_app/forms/validation.rs - Field validators shared by the forms
//
// Each validator returns `Ok(())` or the single error shown for the field.
// Lengths are counted in characters after trimming.

use std::sync::LazyLock;

use regex::Regex;

use crate::web_app::error::FieldError;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone regex is valid"));

static PHONE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-()]").expect("phone separator regex is valid"));

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    validate_min_length(value, "Name", NAME_MIN_CHARS)
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    validate_min_length(value, "Message", MESSAGE_MIN_CHARS)
}

/// Length is counted in UTF-16 code units, as the browser counts it
fn validate_min_length(value: &str, label: &'static str, min: usize) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required { label });
    }
    if trimmed.encode_utf16().count() < min {
        return Err(FieldError::TooShort { label, min });
    }
    Ok(())
}

/// Presence is checked on the trimmed value, the pattern on the raw value
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required { label: "Email" });
    }
    if !EMAIL.is_match(value) {
        return Err(FieldError::InvalidFormat { expected: "email address" });
    }
    Ok(())
}

/// Optional; separators (whitespace, `-`, `(`, `)`) are ignored
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    let digits = PHONE_SEPARATORS.replace_all(value, "");
    if !PHONE.is_match(&digits) {
        return Err(FieldError::InvalidFormat { expected: "phone number" });
    }
    Ok(())
}

pub fn validate_selection<T>(value: Option<T>, expected: &'static str) -> Result<(), FieldError> {
    match value {
        Some(_) => Ok(()),
        None => Err(FieldError::SelectionRequired { expected }),
    }
}

pub fn validate_quantity(value: &str) -> Result<u64, FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required { label: "Quantity" });
    }
    match parse_leading_int(value) {
        Some(n) if n > 0 => Ok(n.unsigned_abs()),
        _ => Err(FieldError::InvalidQuantity),
    }
}

/// Integer prefix of a string, the way a browser's `parseInt` reads it
///
/// Leading whitespace and one sign are accepted, a `0x` prefix switches to
/// hexadecimal, and parsing stops at the first character that is not a
/// digit. Returns `None` when no digit was read. Overflow saturates.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let mut rest = value.trim_start();
    let negative = match rest.as_bytes().first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let radix = match rest.get(..2) {
        Some("0x") | Some("0X") => {
            rest = &rest[2..];
            16
        }
        _ => 10,
    };

    let mut magnitude: Option<i64> = None;
    for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
        let current = magnitude.unwrap_or(0);
        magnitude = Some(
            current
                .saturating_mul(i64::from(radix))
                .saturating_add(i64::from(digit)),
        );
    }

    magnitude.map(|m| if negative { -m } else { m })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name("   "), Err(FieldError::Required { label: "Name" }));
        assert_eq!(validate_name(" J "), Err(FieldError::TooShort { label: "Name", min: 2 }));
        assert_eq!(validate_name("Jo"), Ok(()));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // One emoji is a surrogate pair
        assert_eq!(validate_name("😀"), Ok(()));
        assert_eq!(validate_name("é"), Err(FieldError::TooShort { label: "Name", min: 2 }));
        assert_eq!(validate_message("😀😀😀😀😀"), Ok(()));
        assert_eq!(
            validate_message("😀😀😀😀é"),
            Err(FieldError::TooShort { label: "Message", min: 10 })
        );
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("a@b.co").is_ok());
        assert_eq!(validate_email(""), Err(FieldError::Required { label: "Email" }));
        for bad in ["foo@bar", "foo@@bar.com", "foo bar@x.com", "@x.com", " a@b.co"] {
            assert!(validate_email(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_phone_rules() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("0123456").is_err());
        assert!(validate_phone("12345678901234567").is_err());
        assert!(validate_phone("555-CALL").is_err());
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int("  12abc"), Some(12));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("1.9"), Some(1));
        assert_eq!(parse_leading_int("0x1A"), Some(26));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_quantity_rules() {
        assert_eq!(validate_quantity(""), Err(FieldError::Required { label: "Quantity" }));
        assert_eq!(validate_quantity("0"), Err(FieldError::InvalidQuantity));
        assert_eq!(validate_quantity("-5"), Err(FieldError::InvalidQuantity));
        assert_eq!(validate_quantity("abc"), Err(FieldError::InvalidQuantity));
        assert_eq!(validate_quantity("12"), Ok(12));
    }
}
