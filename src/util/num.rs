/// Largest unsigned integer value exactly representable as an `f64`
/// (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use minic::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!"), Ok(42.0));
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts the digits of a numeric literal to a number.
///
/// Literals are unsigned decimal digit runs. Runs too long for an `f64`
/// become `inf`, matching how an oversized literal behaves in real-valued
/// arithmetic.
#[must_use]
pub fn literal_to_f64(digits: &str) -> f64 {
    digits.parse().unwrap_or(f64::INFINITY)
}

/// Reads a base-10 integer from the start of a reply.
///
/// Leading and trailing whitespace is ignored, an optional `+` or `-` sign is
/// accepted, and parsing stops at the first non-digit, so `"12abc"` reads as
/// `12`.
///
/// ## Returns
/// - `Some(i64)` when at least one digit was read and the value is exactly
///   representable as an `f64`.
/// - `None` when the reply does not start with a number or is out of range.
///
/// ## Example
/// ```
/// use minic::util::num::parse_integer_prefix;
///
/// assert_eq!(parse_integer_prefix(" -17 "), Some(-17));
/// assert_eq!(parse_integer_prefix("12abc"), Some(12));
/// assert_eq!(parse_integer_prefix("abc"), None);
/// ```
#[must_use]
pub fn parse_integer_prefix(reply: &str) -> Option<i64> {
    let trimmed = reply.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..digits_len].parse().ok()?;
    if magnitude > MAX_SAFE_I64_INT {
        return None;
    }

    Some(if negative { -magnitude } else { magnitude })
}

/// Formats a number for output.
///
/// Integral values print without a fractional part, other finite values use
/// the shortest decimal that round-trips. Infinities print as `Infinity` and
/// `-Infinity`, and negative zero prints as `0`.
///
/// ## Example
/// ```
/// use minic::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_prefix_accepts_signs_and_trailing_text() {
        assert_eq!(parse_integer_prefix("42"), Some(42));
        assert_eq!(parse_integer_prefix("+8"), Some(8));
        assert_eq!(parse_integer_prefix("  -3\n"), Some(-3));
        assert_eq!(parse_integer_prefix("7.9"), Some(7));
        assert_eq!(parse_integer_prefix("007"), Some(7));
    }

    #[test]
    fn integer_prefix_rejects_non_numbers() {
        assert_eq!(parse_integer_prefix(""), None);
        assert_eq!(parse_integer_prefix("-"), None);
        assert_eq!(parse_integer_prefix("abc"), None);
        assert_eq!(parse_integer_prefix("- 4"), None);
        assert_eq!(parse_integer_prefix("99999999999999999999"), None);
        assert_eq!(parse_integer_prefix("9007199254740992"), None);
    }

    #[test]
    fn numbers_format_like_printed_output() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn literals_convert_to_reals() {
        assert!((literal_to_f64("0042") - 42.0).abs() < f64::EPSILON);
        assert!(literal_to_f64(&"9".repeat(400)).is_infinite());
    }
}
