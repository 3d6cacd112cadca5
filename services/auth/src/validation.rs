//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

/// Minimum password length accepted at sign-up
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate a password entered at sign-in
///
/// Strength rules belong to the backend; here it only has to be present.
pub fn validate_login_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    Ok(())
}

/// Validate a password chosen at sign-up
pub fn validate_new_password(password: &str) -> Result<(), String> {
    validate_login_password(password)?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.se").is_ok());
        assert_eq!(validate_email("").unwrap_err(), "Email is required");
        assert_eq!(
            validate_email("not-an-email").unwrap_err(),
            "Invalid email format"
        );
        assert!(validate_email("ada@localhost").is_err());
    }

    #[test]
    fn test_validate_new_password() {
        assert!(validate_new_password("12345678").is_ok());
        assert_eq!(
            validate_new_password("1234567").unwrap_err(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            validate_new_password("").unwrap_err(),
            "Password is required"
        );
        assert!(validate_new_password(&"x".repeat(200)).is_ok());
        assert!(validate_new_password("åäöåäöå").is_err());
        assert!(validate_new_password("åäöåäöåä").is_ok());
    }

    #[test]
    fn test_login_password_only_needs_a_value() {
        assert!(validate_login_password("x").is_ok());
        assert!(validate_login_password("").is_err());
    }
}
