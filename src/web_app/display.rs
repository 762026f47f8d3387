// web_app/display.rs - Formatting helpers used by the components

use rust_decimal::{Decimal, RoundingStrategy};

/// US dollar amount with thousands separators, e.g. `$1,234.56`
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Full, half and empty stars for a 0-5 rating
///
/// Any fractional part shows a half star.
pub fn star_counts(rating: f64) -> (usize, bool, usize) {
    let rating = if rating.is_finite() { rating.clamp(0.0, 5.0) } else { 0.0 };
    let full = rating.floor() as usize;
    let half = rating.fract() > 0.0;
    let empty = 5 - full - usize::from(half);
    (full, half, empty)
}

/// First `max` characters, with an ellipsis when something was cut
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Decimal::new(8999, 2)), "$89.99");
        assert_eq!(format_usd(Decimal::new(123456, 2)), "$1,234.56");
        assert_eq!(format_usd(Decimal::new(100000000, 2)), "$1,000,000.00");
        assert_eq!(format_usd(Decimal::new(5, 0)), "$5.00");
        assert_eq!(format_usd(Decimal::new(-1999, 2)), "-$19.99");
    }

    #[test]
    fn test_star_counts() {
        assert_eq!(star_counts(4.8), (4, true, 0));
        assert_eq!(star_counts(4.0), (4, false, 1));
        assert_eq!(star_counts(0.0), (0, false, 5));
        assert_eq!(star_counts(7.0), (5, false, 0));
        assert_eq!(star_counts(f64::NAN), (0, false, 5));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("a long sentence here", 6), "a long...");
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
    }
}
