use crate::error::{AppError, Result};

/// Validates an email address.
///
/// Shape checks only: non-empty, contains an `@`, bounded length.
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation(
            "A valid email address is required".to_string(),
        ));
    }

    if email.len() > 255 {
        return Err(AppError::Validation(
            "Email must be at most 255 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validates a password.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(AppError::Validation(
            "Password cannot be empty".to_string(),
        ));
    }

    if password.len() > 128 {
        return Err(AppError::Validation(
            "Password must be at most 128 characters".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses_and_short_passwords() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_password("pw1").is_ok());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_password("").is_err());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }
}
