//! Reusable field validators
//!
//! These are the building blocks the order rules are assembled from.

use chrono::NaiveDateTime;

/// Layout `deliveryDate` and `deliveryTime` are joined into (space separated)
pub const DELIVERY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

const MIN_EMAIL_LEN: usize = 3;
const MAX_EMAIL_LEN: usize = 254;

/// Basic email check: length within `3..=254` bytes and at least one `@`.
///
/// This is intentionally not an RFC 5322 validator; strengthening it would
/// change which orders are accepted.
pub fn is_valid_email(email: &str) -> bool {
    (MIN_EMAIL_LEN..=MAX_EMAIL_LEN).contains(&email.len()) && email.contains('@')
}

/// Parse a quantity string as a base-10 integer (optional leading sign)
pub fn parse_quantity(quantity: &str) -> Option<i64> {
    quantity.parse().ok()
}

/// Combine `YYYY-MM-DD` and `HH:MM` into one naive instant.
///
/// The parse is strict: zero-padded fields only, 24-hour clock, no seconds,
/// no timezone and no surrounding whitespace.
pub fn parse_delivery_datetime(date: &str, time: &str) -> Option<NaiveDateTime> {
    if !matches_shape(date, b"dddd-dd-dd") || !matches_shape(time, b"dd:dd") {
        return None;
    }

    let combined = format!("{} {}", date, time);
    NaiveDateTime::parse_from_str(&combined, DELIVERY_DATETIME_FORMAT).ok()
}

/// `d` matches an ASCII digit, any other byte must match literally
fn matches_shape(value: &str, shape: &[u8]) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape).all(|(b, &s)| match s {
            b'd' => b.is_ascii_digit(),
            _ => b == s,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_email_requires_at_sign() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("a@b"));
        assert!(!is_valid_email("bad-email"));
    }

    #[test]
    fn test_email_length_bounds() {
        assert!(!is_valid_email("@b"));
        assert!(is_valid_email("a@b"));

        let local = "a".repeat(252);
        assert!(is_valid_email(&format!("{}@b", local)));
        assert!(!is_valid_email(&format!("{}@bc", local)));
    }

    #[test]
    fn test_email_check_is_weak() {
        // Accepted on purpose: only length and '@' are checked
        assert!(is_valid_email("@@@"));
        assert!(is_valid_email("not an email @ all"));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("50"), Some(50));
        assert_eq!(parse_quantity("+1000"), Some(1000));
        assert_eq!(parse_quantity("-3"), Some(-3));
        assert_eq!(parse_quantity("12.5"), None);
        assert_eq!(parse_quantity("1,000"), None);
        assert_eq!(parse_quantity(" 50"), None);
        assert_eq!(parse_quantity("fifty"), None);
    }

    #[test]
    fn test_parse_delivery_datetime() {
        let parsed = parse_delivery_datetime("2025-03-10", "14:30").unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(parsed, expected);

        assert!(parse_delivery_datetime("2024-02-29", "00:00").is_some());
        assert!(parse_delivery_datetime("2025-12-31", "23:59").is_some());
    }

    #[test]
    fn test_parse_delivery_datetime_rejects_bad_layouts() {
        let cases = [
            ("2025/03/10", "14:30"),
            ("10-03-2025", "14:30"),
            ("2025-3-10", "14:30"),
            ("2025-03-10", "2:30"),
            ("2025-03-10", "14:30:00"),
            ("2025-03-10", "2:30 PM"),
            ("2025-03-10T14:30", ""),
            (" 2025-03-10", "14:30"),
            ("2025-03-10", "14:30Z"),
        ];

        for (date, time) in cases {
            assert!(
                parse_delivery_datetime(date, time).is_none(),
                "{:?} {:?} should be rejected",
                date,
                time
            );
        }
    }

    #[test]
    fn test_parse_delivery_datetime_rejects_out_of_range() {
        assert!(parse_delivery_datetime("2025-02-30", "10:00").is_none());
        assert!(parse_delivery_datetime("2025-13-01", "10:00").is_none());
        assert!(parse_delivery_datetime("2025-03-10", "24:00").is_none());
        assert!(parse_delivery_datetime("2025-03-10", "12:60").is_none());
    }
}
