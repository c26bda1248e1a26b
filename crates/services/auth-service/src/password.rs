//! Password hashing.
//!
//! Argon2id with a fixed cost. Hashes are PHC strings
//! (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`) that carry their own
//! parameters, so verification keeps working if the cost is raised later.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, Error as HashError, PasswordHash, SaltString},
    Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier as _, Version,
};

use common::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// One-way salted password hashing capability.
#[cfg_attr(test, automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing hash string.
    ///
    /// Fails with a validation error if the password is empty or whitespace.
    fn hash(&self, password: &str) -> AppResult<String>;

    /// Check a plaintext password against a stored hash.
    ///
    /// A wrong password is `Ok(false)`, never an error.
    fn verify(&self, password: &str, hash: &str) -> AppResult<bool>;
}

/// Argon2id hasher.
#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Argon2Hasher {
    /// Hasher with the production cost (19 MiB, 2 passes, 1 lane).
    pub fn new() -> Self {
        Self::from_params(Params::DEFAULT)
    }

    /// Hasher with an explicit cost.
    pub fn with_cost(m_cost: u32, t_cost: u32, p_cost: u32) -> AppResult<Self> {
        let params = Params::new(m_cost, t_cost, p_cost, None)
            .map_err(|e| AppError::internal(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Self::from_params(params))
    }

    fn from_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

fn require_non_blank(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> AppResult<String> {
        require_non_blank(password, "Password")?;

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        require_non_blank(password, "Password")?;
        require_non_blank(hash, "Password hash")?;

        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;

        // Parameters come from the parsed hash; the output comparison is constant-time
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!("Password verify failed: {}", e))),
        }
    }
}

/// Hash on the blocking pool; hashing is deliberately CPU-expensive.
pub(crate) async fn hash_blocking(
    hasher: &Arc<dyn PasswordHasher>,
    password: String,
) -> AppResult<String> {
    let hasher = Arc::clone(hasher);
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| AppError::internal(format!("Hash task failed: {}", e)))?
}

/// Verify on the blocking pool.
pub(crate) async fn verify_blocking(
    hasher: &Arc<dyn PasswordHasher>,
    password: String,
    hash: String,
) -> AppResult<bool> {
    let hasher = Arc::clone(hasher);
    tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|e| AppError::internal(format!("Verify task failed: {}", e)))?
}
