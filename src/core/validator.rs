use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::domain::model::ValidationResult;

pub const NAME_TOO_SHORT: &str = "Name must be at least 5 characters long";
pub const EMAIL_INVALID: &str = "Enter a valid email address";
pub const PHONE_WRONG_LENGTH: &str = "Phone number must be 10 digits";
pub const PHONE_PLACEHOLDER: &str = "Please enter a real phone number";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const PASSWORD_IS_PASSWORD: &str = "Password cannot be \"password\"";
pub const PASSWORD_CONTAINS_NAME: &str = "Password cannot contain your name";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";

/// Thresholds used by the field predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    pub min_name_length: usize,
    pub min_password_length: usize,
    pub phone_digits: usize,
    pub rejected_phone: String,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_name_length: 5,
            min_password_length: 8,
            phone_digits: 10,
            rejected_phone: "1234567890".to_string(),
        }
    }
}

fn non_digits() -> &'static Regex {
    static NON_DIGITS: OnceLock<Regex> = OnceLock::new();
    NON_DIGITS.get_or_init(|| Regex::new(r"[^0-9]").expect("static pattern"))
}

fn with_limit(message: &str, limit: usize, default_limit: usize) -> String {
    // Messages name the configured limit when it differs from the stock one.
    if limit == default_limit {
        message.to_string()
    } else {
        message.replace(&default_limit.to_string(), &limit.to_string())
    }
}

impl ValidationRules {
    pub fn validate_name(&self, name: &str) -> ValidationResult {
        if name.is_empty() || name.trim().chars().count() < self.min_name_length {
            return ValidationResult::invalid(with_limit(NAME_TOO_SHORT, self.min_name_length, 5));
        }
        ValidationResult::valid()
    }

    pub fn validate_email(&self, email: &str) -> ValidationResult {
        if email.is_empty() || !email.contains('@') {
            return ValidationResult::invalid(EMAIL_INVALID);
        }
        ValidationResult::valid()
    }

    pub fn validate_phone(&self, phone: &str) -> ValidationResult {
        let cleaned = non_digits().replace_all(phone, "");

        if cleaned.chars().count() != self.phone_digits {
            return ValidationResult::invalid(with_limit(PHONE_WRONG_LENGTH, self.phone_digits, 10));
        }

        if !self.rejected_phone.is_empty() && cleaned == self.rejected_phone.as_str() {
            return ValidationResult::invalid(PHONE_PLACEHOLDER);
        }

        ValidationResult::valid()
    }

    /// `username` is the full name field; an empty one skips the containment rule.
    pub fn validate_password(&self, password: &str, username: &str) -> ValidationResult {
        if password.is_empty() || password.chars().count() < self.min_password_length {
            return ValidationResult::invalid(with_limit(
                PASSWORD_TOO_SHORT,
                self.min_password_length,
                8,
            ));
        }

        let lowered = password.to_lowercase();
        if lowered == "password" {
            return ValidationResult::invalid(PASSWORD_IS_PASSWORD);
        }

        if !username.is_empty() && lowered.contains(&username.to_lowercase()) {
            return ValidationResult::invalid(PASSWORD_CONTAINS_NAME);
        }

        ValidationResult::valid()
    }

    pub fn validate_confirm_password(&self, password: &str, confirm: &str) -> ValidationResult {
        if password != confirm {
            return ValidationResult::invalid(PASSWORDS_DIFFER);
        }
        ValidationResult::valid()
    }
}

pub fn validate_name(name: &str) -> ValidationResult {
    ValidationRules::default().validate_name(name)
}

pub fn validate_email(email: &str) -> ValidationResult {
    ValidationRules::default().validate_email(email)
}

pub fn validate_phone(phone: &str) -> ValidationResult {
    ValidationRules::default().validate_phone(phone)
}

pub fn validate_password(password: &str, username: &str) -> ValidationResult {
    ValidationRules::default().validate_password(password, username)
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> ValidationResult {
    ValidationRules::default().validate_confirm_password(password, confirm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(!validate_name("").is_valid);
        assert!(!validate_name("Al").is_valid);
        assert!(validate_name("Alice").is_valid);
        // surrounding whitespace does not count
        assert!(!validate_name("  Bob  ").is_valid);
        assert_eq!(validate_name("Al").message, NAME_TOO_SHORT);
        assert_eq!(validate_name("Alice").message, "");
    }

    #[test]
    fn test_validate_name_counts_characters() {
        assert!(validate_name("Zoë K").is_valid);
        assert!(!validate_name("Zoë").is_valid);
    }

    #[test]
    fn test_validate_email_is_permissive() {
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("john.example.com").is_valid);
        assert!(validate_email("john@example.com").is_valid);
        assert!(validate_email("@").is_valid);
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("5551234567").is_valid);
        assert!(validate_phone("(555) 123-4567").is_valid);
        assert_eq!(validate_phone("123-456-7890").message, PHONE_PLACEHOLDER);
        assert_eq!(validate_phone("555123456").message, PHONE_WRONG_LENGTH);
        assert_eq!(validate_phone("55512345678").message, PHONE_WRONG_LENGTH);
        assert_eq!(validate_phone("").message, PHONE_WRONG_LENGTH);
    }

    #[test]
    fn test_validate_phone_only_counts_ascii_digits() {
        assert_eq!(validate_phone("٥٥٥١٢٣٤٥٦٧").message, PHONE_WRONG_LENGTH);
        assert_eq!(validate_phone("５５５１２３４５６７").message, PHONE_WRONG_LENGTH);
        // non-ASCII digits are stripped like any other separator
        assert!(validate_phone("555١123٢4567").is_valid);
    }

    #[test]
    fn test_validate_password() {
        assert_eq!(validate_password("password", "").message, PASSWORD_IS_PASSWORD);
        assert_eq!(validate_password("PassWord", "").message, PASSWORD_IS_PASSWORD);
        assert_eq!(validate_password("short", "").message, PASSWORD_TOO_SHORT);
        assert_eq!(validate_password("", "").message, PASSWORD_TOO_SHORT);
        assert!(validate_password("mysecret1", "bob").is_valid);
        assert_eq!(
            validate_password("bobistheman", "bob").message,
            PASSWORD_CONTAINS_NAME
        );
        assert_eq!(
            validate_password("xxBOBxxxx", "Bob").message,
            PASSWORD_CONTAINS_NAME
        );
    }

    #[test]
    fn test_validate_confirm_password_is_exact() {
        assert!(validate_confirm_password("mysecret1", "mysecret1").is_valid);
        assert!(validate_confirm_password("", "").is_valid);
        assert_eq!(
            validate_confirm_password("mysecret1", "MySecret1").message,
            PASSWORDS_DIFFER
        );
    }

    #[test]
    fn test_custom_rules() {
        let rules = ValidationRules {
            min_name_length: 3,
            min_password_length: 12,
            phone_digits: 10,
            rejected_phone: String::new(),
        };
        assert!(rules.validate_name("Bob").is_valid);
        assert!(rules.validate_phone("1234567890").is_valid);
        assert_eq!(
            rules.validate_password("mysecret1", "").message,
            "Password must be at least 12 characters long"
        );
        assert_eq!(
            rules.validate_name("Al").message,
            "Name must be at least 3 characters long"
        );
    }
}
