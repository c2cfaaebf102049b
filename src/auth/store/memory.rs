/**
 * In-Memory Credential Store
 *
 * HashMap-backed implementation of the `CredentialStore` contract, used
 * when `DATABASE_URL` is not configured and by tests. The map is keyed by
 * username, so the uniqueness check and the insert happen under one lock
 * and the duplicate guarantee holds under concurrent registration.
 */

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::store::{Credential, CredentialStore, NewCredential, StoreError};

/// Credential store held entirely in process memory
///
/// Contents are lost on restart; exact, case-sensitive username matching.
#[derive(Default)]
pub struct MemoryCredentialStore {
    records: Mutex<HashMap<String, Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::Storage("credential store lock poisoned".to_string()))?;

        Ok(records.get(username).cloned())
    }

    async fn insert(&self, candidate: NewCredential) -> Result<Credential, StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Storage("credential store lock poisoned".to_string()))?;

        if records.contains_key(&candidate.username) {
            return Err(StoreError::DuplicateUsername);
        }

        let credential = Credential {
            id: Uuid::new_v4(),
            username: candidate.username.clone(),
            password_hash: candidate.password_hash,
        };

        records.insert(candidate.username, credential.clone());
        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn candidate(username: &str) -> NewCredential {
        NewCredential {
            username: username.to_string(),
            password_hash: "$2b$04$fakehash".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_identity() {
        let store = MemoryCredentialStore::new();
        let credential = store.insert(candidate("alice")).await.unwrap();

        assert_eq!(credential.username, "alice");
        assert!(!credential.id.is_nil());
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_username() {
        let store = MemoryCredentialStore::new();
        store.insert(candidate("alice")).await.unwrap();

        let result = store.insert(candidate("alice")).await;
        assert_matches!(result, Err(StoreError::DuplicateUsername));
    }

    #[tokio::test]
    async fn find_returns_inserted_credential() {
        let store = MemoryCredentialStore::new();
        let inserted = store.insert(candidate("alice")).await.unwrap();

        let found = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, inserted.id);
        assert_eq!(found.password_hash, inserted.password_hash);
    }

    #[tokio::test]
    async fn find_absent_is_not_an_error() {
        let store = MemoryCredentialStore::new();
        let found = store.find_by_username("nobody").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive() {
        let store = MemoryCredentialStore::new();
        store.insert(candidate("Alice")).await.unwrap();

        assert!(store.find_by_username("alice").await.unwrap().is_none());
        assert!(store.find_by_username("Alice").await.unwrap().is_some());
    }
}
