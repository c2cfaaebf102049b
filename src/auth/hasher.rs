/**
 * Password Hashing
 *
 * This module defines the one-way hashing capability the flows depend on,
 * and its bcrypt implementation. Each hash is bound to a freshly generated
 * random salt, so hashing the same password twice yields different strings;
 * verification recomputes from the salt embedded in the stored hash.
 *
 * Hashing is deliberately expensive, so the bcrypt work runs on the tokio
 * blocking pool and the async flows stay non-blocking.
 */

use async_trait::async_trait;
use thiserror::Error;

/// Hashing failures
#[derive(Debug, Error)]
pub enum HashError {
    /// bcrypt rejected the input or the stored hash is malformed
    #[error("hashing failed: {0}")]
    Hash(String),

    /// The blocking hashing task was cancelled or panicked
    #[error("hashing task failed to complete")]
    TaskFailed,
}

/// One-way password hashing with per-password random salt
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a raw password with a fresh random salt.
    async fn hash(&self, raw: &str) -> Result<String, HashError>;

    /// Verify a raw password against a stored hash.
    ///
    /// Returns `Ok(true)` iff `raw` matches the password originally hashed
    /// into `stored`. A mismatch is `Ok(false)`, not an error.
    async fn verify(&self, raw: &str, stored: &str) -> Result<bool, HashError>;
}

/// bcrypt-backed hasher
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Hasher at bcrypt's default cost
    pub fn new() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }

    /// Hasher at an explicit cost. Tests use the bcrypt minimum (4) to
    /// keep them fast; the server always runs at the default cost.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash(&self, raw: &str) -> Result<String, HashError> {
        let raw = raw.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(raw, cost))
            .await
            .map_err(|_| HashError::TaskFailed)?
            .map_err(|e| HashError::Hash(e.to_string()))
    }

    async fn verify(&self, raw: &str, stored: &str) -> Result<bool, HashError> {
        let raw = raw.to_string();
        let stored = stored.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(raw, &stored))
            .await
            .map_err(|_| HashError::TaskFailed)?
            .map_err(|e| HashError::Hash(e.to_string()))
    }
}
