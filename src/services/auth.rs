use argon2::{
    Argon2, ParamsBuilder,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::{RngCore, rngs::OsRng};
use zeroize::Zeroize;

use crate::error::{AppError, Result};
use crate::models::user::User;
use crate::storage::Store;

/// The memory cost for Argon2 in MB.
const ARGON2_MEMORY_MB: u32 = 19;
/// The number of iterations for Argon2.
const ARGON2_ITERATIONS: u32 = 3;
/// The parallelism factor for Argon2.
const ARGON2_PARALLELISM: u32 = 1;

/// Hashes a password using Argon2id.
fn hash_password(password: &str) -> Result<String> {
    let mut password_bytes = password.as_bytes().to_vec();

    let mut salt_bytes = [0u8; 16];
    OsRng.fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::Internal(format!("Salt encoding error: {}", e)))?;

    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        ParamsBuilder::new()
            .m_cost(ARGON2_MEMORY_MB * 1024)
            .t_cost(ARGON2_ITERATIONS)
            .p_cost(ARGON2_PARALLELISM)
            .build()
            .map_err(|e| AppError::Internal(format!("Argon2 params: {}", e)))?,
    );

    let password_hash = argon2
        .hash_password(&password_bytes, &salt)
        .map_err(|e| AppError::Internal(format!("Argon2 hash error: {}", e)))?
        .to_string();

    password_bytes.zeroize();
    Ok(password_hash)
}

/// Verifies a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let mut password_bytes = password.as_bytes().to_vec();
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Hash parse error: {}", e)))?;
    let argon2 = Argon2::default();
    let result = argon2.verify_password(&password_bytes, &parsed_hash).is_ok();

    password_bytes.zeroize();
    Ok(result)
}

/// Registers a new user.
///
/// # Arguments
///
/// * `store` - The storage backend.
/// * `email` - The user's email. Must not already be registered.
/// * `password` - The user's password, hashed before it reaches the store.
///
/// # Returns
///
/// A `Result` containing the created `User`.
pub fn register(store: &dyn Store, email: String, password: String) -> Result<User> {
    tracing::debug!("🔐 Registering user: {}", email);
    let password_hash = hash_password(&password)?;
    let user = store.create_user(email, password_hash)?;

    tracing::info!("✅ User registered: {}", user.id);
    Ok(user)
}

/// Authenticates a user by email and password.
///
/// Unknown emails and wrong passwords are indistinguishable to the caller.
pub fn authenticate(store: &dyn Store, email: &str, password: &str) -> Result<User> {
    tracing::debug!("🔐 Authenticating user: {}", email);

    let user = store
        .find_user_by_email(email)
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!("✅ User authenticated: {}", user.id);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DeletePolicy, memory::MemoryStore};

    #[test]
    fn register_then_authenticate_round_trip() {
        let store = MemoryStore::new(DeletePolicy::Orphan);
        let user = register(&store, "a@x.com".to_string(), "pw1".to_string()).unwrap();

        let authed = authenticate(&store, "a@x.com", "pw1").unwrap();
        assert_eq!(authed.id, user.id);
    }

    #[test]
    fn wrong_password_and_unknown_email_look_the_same() {
        let store = MemoryStore::new(DeletePolicy::Orphan);
        register(&store, "a@x.com".to_string(), "pw1".to_string()).unwrap();

        let err = authenticate(&store, "a@x.com", "wrong").unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));

        let err = authenticate(&store, "nobody@x.com", "pw1").unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[test]
    fn password_hash_is_not_the_password() {
        let store = MemoryStore::new(DeletePolicy::Orphan);
        let user = register(&store, "a@x.com".to_string(), "pw1".to_string()).unwrap();
        assert_ne!(user.password_hash, "pw1");
        assert!(user.password_hash.starts_with("$argon2id$"));
    }
}
