/**
 * PostgreSQL Credential Store
 *
 * sqlx-backed implementation of the `CredentialStore` contract. The
 * `credentials` table carries a unique index on `username` (see
 * `migrations/`); that index is the sole arbiter of registration races.
 *
 * # Error Normalization
 *
 * A unique-constraint violation on insert is mapped to
 * `StoreError::DuplicateUsername`; every other sqlx error collapses into
 * `StoreError::Storage` with the driver message, which the flows log and
 * never surface to callers.
 */

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::store::{Credential, CredentialStore, NewCredential, StoreError};

/// Credential store backed by a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        let credential = sqlx::query_as::<_, Credential>(
            r#"
            SELECT id, username, password_hash
            FROM credentials
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(credential)
    }

    async fn insert(&self, candidate: NewCredential) -> Result<Credential, StoreError> {
        let id = Uuid::new_v4();

        let credential = sqlx::query_as::<_, Credential>(
            r#"
            INSERT INTO credentials (id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash
            "#,
        )
        .bind(id)
        .bind(&candidate.username)
        .bind(&candidate.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                StoreError::DuplicateUsername
            } else {
                StoreError::Storage(e.to_string())
            }
        })?;

        Ok(credential)
    }
}
