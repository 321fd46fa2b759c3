//! Password encoding for user records
//!
//! Stores never persist a plaintext password. When a user is staged, a
//! plaintext `password` is replaced with its argon2 PHC string; a value that
//! already is an argon2 PHC string is left untouched, so a user read back from
//! storage can be re-saved without double encoding.

use crate::{Result, StorageError};
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use hbnb_types::{Record, User};
use rand::rngs::OsRng;

/// Hash a plaintext password into a PHC string.
pub fn encode(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StorageError::Password(format!("Failed to hash password: {}", e)))
}

/// True only for argon2 PHC strings. Other PHC-shaped values count as plaintext.
pub fn is_encoded(value: &str) -> bool {
    PasswordHash::new(value)
        .map(|hash| hash.algorithm.as_str().starts_with("argon2"))
        .unwrap_or(false)
}

/// Check `candidate` against an encoded password.
pub fn verify(candidate: &str, encoded: &str) -> Result<bool> {
    let parsed = PasswordHash::new(encoded)
        .map_err(|e| StorageError::Password(format!("Invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok())
}

/// Encode the user's password in place unless it is empty or already encoded.
pub fn encode_user(user: &mut User) -> Result<()> {
    if user.password.is_empty() || is_encoded(&user.password) {
        return Ok(());
    }
    user.password = encode(&user.password)?;
    tracing::debug!("Encoded password for user {}", user.base.id);
    Ok(())
}

/// Apply [`encode_user`] if the record is a user. Other kinds pass through.
pub fn prepare(record: &mut Record) -> Result<()> {
    match record {
        Record::User(user) => encode_user(user),
        _ => Ok(()),
    }
}
