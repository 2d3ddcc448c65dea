//! Password strength rules shared by the signup and reset flows.
//!
//! Pure and total: every rule is evaluated against the whole candidate on
//! each call, so hosts can re-render the checklist on every keystroke.

/// Minimum password length accepted on any form.
pub const MIN_LENGTH: usize = 8;

/// Special characters accepted by the strength rules.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Per-rule outcome of evaluating a candidate password.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordStrength {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special_char: bool,
    pub length: bool,
}

impl PasswordStrength {
    /// All five rules satisfied.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.uppercase && self.lowercase && self.digit && self.special_char && self.length
    }

    /// Checklist in display order, one label per rule with its outcome.
    #[must_use]
    pub const fn checklist(&self) -> [(&'static str, bool); 5] {
        [
            ("At least one uppercase letter", self.uppercase),
            ("At least one lowercase letter", self.lowercase),
            ("At least one number", self.digit),
            ("At least one special character", self.special_char),
            ("At least 8 characters long", self.length),
        ]
    }

    /// Labels of the rules the candidate does not yet satisfy.
    #[must_use]
    pub fn unmet(&self) -> Vec<&'static str> {
        self.checklist()
            .iter()
            .filter(|(_, met)| !met)
            .map(|(label, _)| *label)
            .collect()
    }
}

/// Evaluate every strength rule against `password`.
#[must_use]
pub fn evaluate(password: &str) -> PasswordStrength {
    PasswordStrength {
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        digit: password.chars().any(|c| c.is_ascii_digit()),
        special_char: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        length: password.chars().count() >= MIN_LENGTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_all_rules_met() {
        let strength = evaluate("Abc123!@");

        assert!(strength.uppercase);
        assert!(strength.lowercase);
        assert!(strength.digit);
        assert!(strength.special_char);
        assert!(strength.length);
        assert!(strength.is_valid());
        assert!(strength.unmet().is_empty());
    }

    #[test]
    fn test_evaluate_reports_each_missing_rule() {
        let strength = evaluate("abc123");

        assert!(!strength.uppercase);
        assert!(strength.lowercase);
        assert!(strength.digit);
        assert!(!strength.special_char);
        assert!(!strength.length);
        assert!(!strength.is_valid());
        assert_eq!(
            strength.unmet(),
            vec![
                "At least one uppercase letter",
                "At least one special character",
                "At least 8 characters long",
            ]
        );
    }

    #[test]
    fn test_evaluate_empty_password() {
        let strength = evaluate("");

        assert_eq!(strength, PasswordStrength::default());
        assert!(!strength.is_valid());
        assert_eq!(strength.unmet().len(), 5);
    }

    #[test]
    fn test_evaluate_each_special_char_counts() {
        for special in SPECIAL_CHARS.chars() {
            let password = format!("Abcdef1{special}");
            assert!(
                evaluate(&password).is_valid(),
                "expected {password:?} to be valid"
            );
        }
    }

    #[test]
    fn test_evaluate_length_counts_chars_not_bytes() {
        // 7 chars, more than 8 bytes
        let strength = evaluate("Añ1!añx");
        assert!(!strength.length);

        let strength = evaluate("Añ1!añxz");
        assert!(strength.length);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let first = evaluate("Tr1cky?pass");
        let second = evaluate("Tr1cky?pass");
        assert_eq!(first, second);
    }
}
