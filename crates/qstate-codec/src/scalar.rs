//! Scalar coercion: deciding whether a raw decoded string should surface as
//! [`crate::QueryValue::Number`] or stay [`crate::QueryValue::Text`].
//!
//! A value is numeric only if round-tripping it through `f64` parse and
//! back through Rust's default float formatting reproduces the original
//! string exactly. This rejects leading zeros ("007"), leading "+" ("+5"),
//! exponent notation ("1e3"), and the non-finite spellings ("NaN",
//! "Infinity") even though `f64::from_str` itself accepts all of them;
//! those inputs keep their literal text rather than being renumbered.

/// Parse `raw` as a number if and only if it round-trips losslessly;
/// otherwise return `None` so the caller keeps the original text.
pub fn scalar_from_str(raw: &str) -> Option<f64> {
    let parsed: f64 = raw.parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    if format_number(parsed) == raw {
        Some(parsed)
    } else {
        None
    }
}

/// Render a number the same way [`scalar_from_str`] expects to see it come
/// back, and the way `encode` writes numeric patch values into the query
/// string.
pub fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_integers_and_decimals() {
        assert_eq!(scalar_from_str("42"), Some(42.0));
        assert_eq!(scalar_from_str("0"), Some(0.0));
        assert_eq!(scalar_from_str("3.25"), Some(3.25));
        assert_eq!(scalar_from_str("-7"), Some(-7.0));
    }

    #[test]
    fn rejects_non_round_tripping_spellings() {
        assert_eq!(scalar_from_str("007"), None);
        assert_eq!(scalar_from_str("+5"), None);
        assert_eq!(scalar_from_str("1e3"), None);
        assert_eq!(scalar_from_str("NaN"), None);
        assert_eq!(scalar_from_str("Infinity"), None);
        assert_eq!(scalar_from_str("-Infinity"), None);
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(scalar_from_str("abc"), None);
        assert_eq!(scalar_from_str(""), None);
        assert_eq!(scalar_from_str("4px"), None);
    }

    #[test]
    fn format_number_matches_round_trip_expectations() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(3.25), "3.25");
    }
}
