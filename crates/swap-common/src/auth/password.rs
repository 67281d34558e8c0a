//! Password hashing and strength rules
//!
//! Argon2id with a random salt per hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// `Ok(false)` on mismatch; `Err` only for a malformed stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Every strength rule the password breaks, in a stable order
pub fn password_problems(password: &str) -> Vec<&'static str> {
    let mut problems = Vec::new();
    let len = password.chars().count();

    if len < PASSWORD_MIN_LEN {
        problems.push("Password must be at least 8 characters long.");
    }
    if len > PASSWORD_MAX_LEN {
        problems.push("Password must be at most 128 characters long.");
    }
    if !password.chars().any(char::is_uppercase) {
        problems.push("Password must contain at least one uppercase letter.");
    }
    if !password.chars().any(char::is_lowercase) {
        problems.push("Password must contain at least one lowercase letter.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        problems.push("Password must contain at least one digit.");
    }
    problems
}

pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    match password_problems(password).first() {
        None => Ok(()),
        Some(problem) => Err(AppError::Validation((*problem).to_string())),
    }
}
