use crate::error::{AppError, AppResult};
use bcrypt::{DEFAULT_COST, hash, verify};

/// Minimum length matches the registration form copy
/// ("Password minimal 6 karakter").
pub fn validate_password(password: &str) -> AppResult<()> {
    if password.len() < 6 {
        return Err(AppError::ValidationError(
            "Password minimal 6 karakter".to_string(),
        ));
    }
    if password.len() > 128 {
        return Err(AppError::ValidationError(
            "Password maksimal 128 karakter".to_string(),
        ));
    }

    Ok(())
}

pub fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))
}

pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    verify(password, hash)
        .map_err(|e| AppError::InternalError(format!("Failed to verify password: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password() {
        assert!(validate_password("rahasia").is_ok());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("12345").is_err()); // too short
        assert!(validate_password("").is_err());
        assert!(validate_password(&"a".repeat(129)).is_err()); // too long
    }

    #[test]
    fn test_hash_and_verify_password() {
        let password = "rahasia123";
        let hashed = hash_password(password).unwrap();

        assert!(verify_password(password, &hashed).unwrap());
        assert!(!verify_password("salah123", &hashed).unwrap());
    }
}
