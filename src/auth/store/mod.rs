/**
 * Credential Model and Store Contract
 *
 * This module defines the persisted credential record and the abstract
 * persistence capability the flows depend on. Concrete backends live in
 * the `postgres` and `memory` submodules; both normalize their native
 * uniqueness-violation signal into `StoreError::DuplicateUsername` so the
 * flows never see backend-specific error codes.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// In-memory credential store
pub mod memory;

/// PostgreSQL credential store
pub mod postgres;

/// A persisted username/password-hash record
///
/// Created only by the registration flow; never updated or deleted.
/// The `password_hash` is opaque bcrypt output and never derives the raw
/// password reversibly.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Credential {
    /// Unique credential ID (UUID), assigned by the store at insert
    pub id: Uuid,
    /// Username (unique, case-sensitive)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
}

/// Candidate record for insertion; identity is assigned by the store
#[derive(Debug, Clone)]
pub struct NewCredential {
    pub username: String,
    pub password_hash: String,
}

/// Store-level failures, normalized across backends
#[derive(Debug, Error)]
pub enum StoreError {
    /// A credential with the same username already exists
    #[error("username already exists")]
    DuplicateUsername,

    /// Any other persistence failure (connection, disk, serialization)
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Abstract persistence capability for credentials
///
/// Username matching is exact and case-sensitive in both implementations.
/// The insert must be atomic with respect to the uniqueness constraint:
/// of two concurrent inserts for the same username, exactly one succeeds
/// and the other observes `DuplicateUsername`.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a credential by exact username. Absent is not an error.
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, StoreError>;

    /// Assign identity and persist the candidate.
    ///
    /// # Errors
    ///
    /// `DuplicateUsername` when the username is already taken, `Storage`
    /// for any other persistence failure.
    async fn insert(&self, candidate: NewCredential) -> Result<Credential, StoreError>;
}
