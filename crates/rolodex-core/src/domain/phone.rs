const MATCH_SUFFIX_LEN: usize = 7;

/// Strips everything but ASCII digits from a phone number.
pub fn normalize_phone(value: &str) -> String {
    value.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// The digit suffix used to match against stored phone values.
///
/// Stored numbers come back in mixed international formats, so matching is
/// a substring test on the trailing seven digits; shorter inputs match on
/// the whole normalized string. Returns `None` when the input has no
/// digits at all.
pub fn phone_match_suffix(value: &str) -> Option<String> {
    let digits = normalize_phone(value);
    if digits.is_empty() {
        return None;
    }
    if digits.len() >= MATCH_SUFFIX_LEN {
        Some(digits[digits.len() - MATCH_SUFFIX_LEN..].to_string())
    } else {
        Some(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_phone, phone_match_suffix};

    #[test]
    fn normalize_strips_formatting() {
        assert_eq!(normalize_phone("+31 648 502 148"), "31648502148");
        assert_eq!(normalize_phone("(415) 555-1212"), "4155551212");
    }

    #[test]
    fn suffix_uses_trailing_seven_digits() {
        assert_eq!(phone_match_suffix("+31 648 502 148").unwrap(), "8502148");
    }

    #[test]
    fn short_numbers_match_in_full() {
        assert_eq!(phone_match_suffix("555-12").unwrap(), "55512");
    }

    #[test]
    fn digitless_input_yields_none() {
        assert!(phone_match_suffix("n/a").is_none());
        assert!(phone_match_suffix("").is_none());
    }
}
