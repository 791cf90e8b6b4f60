//! Password hashing and strength rules.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;
use std::sync::OnceLock;

use crate::server::error::{internal::InternalError, AppError};

/// Special characters accepted by the strength rule.
const SPECIAL_CHARS: &str = "@$!%*?&";
const MIN_PASSWORD_LEN: usize = 8;

/// Hash verified when no account matches, so unknown emails cost a full verify.
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Hashes a password with Argon2id and a random 16-byte salt.
///
/// # Returns
/// - `Ok(String)` - PHC-format hash string
/// - `Err(InternalError::PasswordHash)` - Salt encoding or hashing failed
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

/// Checks `password` against a stored PHC hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(InternalError::PasswordHash)` - Stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Hashes on the blocking pool so argon2 does not stall the runtime.
pub async fn hash_password_blocking(password: String) -> Result<String, InternalError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

/// Verifies on the blocking pool.
///
/// With no stored hash a dummy hash is verified instead and the result is always
/// `false`, so a missing account takes as long to reject as a wrong password.
pub async fn verify_password_blocking(
    password: String,
    hash: Option<String>,
) -> Result<bool, InternalError> {
    tokio::task::spawn_blocking(move || match hash {
        Some(hash) => verify_password(&password, &hash),
        None => {
            verify_password(&password, dummy_hash()?)?;
            Ok(false)
        }
    })
    .await?
}

fn dummy_hash() -> Result<&'static str, InternalError> {
    if let Some(hash) = DUMMY_HASH.get() {
        return Ok(hash);
    }
    let hash = hash_password("dummy-password-never-matches")?;
    Ok(DUMMY_HASH.get_or_init(|| hash))
}

/// Enforces the account password policy.
///
/// At least 8 characters with an upper-case letter, a lower-case letter, a digit, and
/// one of `@$!%*?&`.
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    if long_enough && has_upper && has_lower && has_digit && has_special {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Password must be at least {} characters and include upper-case, lower-case, a digit, and one of {}",
            MIN_PASSWORD_LEN, SPECIAL_CHARS
        )))
    }
}
