//! Field-level validation shared by all form drafts.
//!
//! Validation is purely local and synchronous: a draft is checked as a whole
//! at submit time and produces a mapping of field name to message. An empty
//! mapping means the draft is valid.

use std::collections::BTreeMap;

/// Field name -> error message, only for fields currently invalid.
pub type FieldErrors = BTreeMap<String, String>;

/// Implemented by every form draft.
pub trait Validate {
    fn validate(&self) -> FieldErrors;
}

/// Symbols accepted by the password policy.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&.#_-";

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks the `local@domain.tld` shape: no whitespace, a single `@`, and a
/// dot inside the domain part with characters on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Password policy for managed users: 8 to 35 characters with at least one
/// lowercase letter, one uppercase letter, one digit and one symbol from
/// [`PASSWORD_SYMBOLS`]. Characters outside those classes are allowed as
/// filler but do not satisfy any class.
pub fn is_valid_password(value: &str) -> bool {
    let length = value.chars().count();
    if !(8..=35).contains(&length) {
        return false;
    }
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_symbol = value.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    has_lower && has_upper && has_digit && has_symbol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_trims() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(is_valid_email("juan@email.com"));
        assert!(is_valid_email("a.b@sub.domain.org"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("spaces in@mail.com"));
        assert!(!is_valid_email("nodot@domain"));
        assert!(!is_valid_email("enddot@domain."));
        assert!(!is_valid_email("@missing.local"));
    }

    #[test]
    fn password_rejects_short_values() {
        // Seven characters fails regardless of character classes.
        assert!(!is_valid_password("Abcde1#"));
    }

    #[test]
    fn password_rejects_single_class_values() {
        assert!(!is_valid_password("abcdefghij"));
    }

    #[test]
    fn password_accepts_all_four_classes() {
        assert!(is_valid_password("Abcdef1#"));
    }

    #[test]
    fn password_rejects_overlong_values() {
        let long = format!("Aa1#{}", "x".repeat(40));
        assert!(!is_valid_password(&long));
    }

    #[test]
    fn password_requires_symbol_from_allowed_set() {
        assert!(!is_valid_password("Abcdefg1"));
        assert!(is_valid_password("Abcdefg1-"));
    }
}
