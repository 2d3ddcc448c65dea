//! Synchronous form validators and the per-submit validation error set.

use regex::Regex;
use std::collections::BTreeMap;

/// Message shown when the email field fails the shape check.
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

/// Message shown when the password misses at least one strength rule.
pub const PASSWORD_WEAK: &str = "Password does not meet all requirements";

/// Message shown when the confirmation does not equal the password.
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";

/// Message shown by the login flow for a too-short password.
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";

/// Shape check for `local@domain.tld` addresses. No network lookup, a
/// plain predicate over the whole string.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .is_ok_and(|re| re.is_match(email))
}

/// Exact equality between password and confirmation.
#[must_use]
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

/// A required field is missing when it is empty after trimming.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Field name to human-readable message, recomputed wholesale on each
/// submit attempt. Keys are present only for fields currently failing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Record `<label> is required` for `field` when `value` is blank.
    pub fn require(&mut self, field: &'static str, label: &str, value: &str) {
        if is_blank(value) {
            self.insert(field, format!("{label} is required"));
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Field/message pairs in deterministic (field name) order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("user@example.com"));
        assert!(valid_email("first.last+tag@sub.domain.org"));
        assert!(valid_email("UPPER_case%ok@host-name.io"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!valid_email(""));
        assert!(!valid_email("no-at-sign"));
        assert!(!valid_email("user@"));
        assert!(!valid_email("user@domain"));
        assert!(!valid_email("user@.com"));
        assert!(!valid_email("user@domain.c"));
        assert!(!valid_email("user name@domain.com"));
    }

    #[test]
    fn test_passwords_match() {
        assert!(passwords_match("Abc123!@", "Abc123!@"));
        assert!(passwords_match("", ""));
        assert!(!passwords_match("Abc123!@", "Abc123!?"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_validation_errors_require() {
        let mut errors = ValidationErrors::new();
        errors.require("firstName", "First name", "  ");
        errors.require("lastName", "Last name", "Doe");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("firstName"), Some("First name is required"));
        assert_eq!(errors.get("lastName"), None);
    }

    #[test]
    fn test_validation_errors_iterate_in_field_order() {
        let mut errors = ValidationErrors::new();
        errors.insert("mobileNumber", "Mobile number is required");
        errors.insert("address", "Address is required");
        errors.insert("email", EMAIL_INVALID);

        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["address", "email", "mobileNumber"]);
    }

    #[test]
    fn test_validation_errors_recomputed_wholesale() {
        let mut errors = ValidationErrors::new();
        errors.insert("email", EMAIL_INVALID);
        assert!(!errors.is_empty());

        errors = ValidationErrors::new();
        assert!(errors.is_empty());
    }
}
