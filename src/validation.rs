//! Input format rules shared by registration and the scheduling endpoints

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("invalid email regex")
});

// North American 10-digit format, optional parens and separators
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$")
        .expect("invalid phone regex")
});

pub fn is_valid_email(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    if phone.trim().is_empty() {
        return false;
    }
    PHONE_RE.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("j@x.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(is_valid_email("UPPER@EXAMPLE.COM"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
    }

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("555.123.4567"));
        assert!(is_valid_phone("5551234567"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone("123-45-678"));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone("555-123-456"));
        assert!(!is_valid_phone(""));
    }
}
