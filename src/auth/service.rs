/**
 * Registration and Authentication Flows
 *
 * This module contains the two flows at the heart of the service. Both are
 * stateless: each call is an independent unit of work against the injected
 * collaborators (store, hasher, issuer), with no lock held across hashing
 * or storage access.
 *
 * # Registration
 *
 * 1. Reject empty username or password before any hashing or storage access
 * 2. Hash the raw password
 * 3. Insert the credential; the store's uniqueness constraint arbitrates
 *    concurrent registrations for the same username
 * 4. Return the stored username
 *
 * # Authentication
 *
 * 1. Look up the credential by username
 * 2. Absent -> `NotFound`
 * 3. Verify the password against the stored hash
 * 4. Mismatch -> `Unauthorized`
 * 5. Issue a token with `{sub: id, username}`
 *
 * # Error Classification
 *
 * The flows catch only the anticipated failure categories from their
 * collaborators and re-classify them into the `AuthError` taxonomy.
 * Anything unrecognized collapses to an internal failure with a stable
 * message; driver detail goes to the log, never past the boundary.
 */

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::hasher::PasswordHasher;
use crate::auth::store::{CredentialStore, NewCredential, StoreError};
use crate::auth::tokens::TokenIssuer;
use crate::error::AuthError;

/// Flow names reported to the observer
pub const FLOW_REGISTRATION: &str = "registration";
pub const FLOW_AUTHENTICATION: &str = "authentication";

/// Registration input: a raw username/password pair
///
/// Absent JSON fields deserialize as empty strings so that missing and
/// empty input fail validation the same way. The raw password is never
/// persisted, logged, or echoed back.
#[derive(Clone, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authentication input: a raw username/password pair
#[derive(Clone, Deserialize)]
pub struct AuthenticationRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for AuthenticationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful authentication result: the signed bearer token
#[derive(Debug, Serialize)]
pub struct AccessToken {
    pub access_token: String,
}

/// Observer for flow-boundary events
///
/// An optional side-channel, injected like the other collaborators and
/// never required for correctness. Implementations must not be handed raw
/// passwords; the flows only report flow name, username, and outcome.
pub trait FlowObserver: Send + Sync {
    fn flow_started(&self, flow: &str, username: &str);
    fn flow_succeeded(&self, flow: &str, username: &str);
    fn flow_failed(&self, flow: &str, username: &str, outcome: &AuthError);
}

/// Default observer: emits tracing events at flow boundaries
pub struct TracingObserver;

impl FlowObserver for TracingObserver {
    fn flow_started(&self, flow: &str, username: &str) {
        tracing::info!(flow, username, "flow started");
    }

    fn flow_succeeded(&self, flow: &str, username: &str) {
        tracing::info!(flow, username, "flow succeeded");
    }

    fn flow_failed(&self, flow: &str, username: &str, outcome: &AuthError) {
        tracing::warn!(flow, username, %outcome, "flow failed");
    }
}

/// The credential service: registration and authentication over injected
/// collaborators
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
    observer: Arc<dyn FlowObserver>,
}

impl AuthService {
    /// Build a service with the default tracing observer
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the flow observer
    pub fn with_observer(mut self, observer: Arc<dyn FlowObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Register a new credential
    ///
    /// Returns the stored username on success - not the credential, not
    /// the hash.
    ///
    /// # Errors
    ///
    /// * `Validation` - empty username or password (no storage access)
    /// * `DuplicateUsername` - the username is already taken
    /// * `Internal` - any other storage or hashing fault
    pub async fn register(&self, request: RegistrationRequest) -> Result<String, AuthError> {
        self.observer.flow_started(FLOW_REGISTRATION, &request.username);

        let result = self.try_register(&request).await;
        match &result {
            Ok(username) => self.observer.flow_succeeded(FLOW_REGISTRATION, username),
            Err(err) => self
                .observer
                .flow_failed(FLOW_REGISTRATION, &request.username, err),
        }

        result
    }

    /// Authenticate a username/password pair
    ///
    /// Returns a signed access token on success. A failed attempt never
    /// mutates the stored credential.
    ///
    /// # Errors
    ///
    /// * `NotFound` - no credential for this username
    /// * `Unauthorized` - the password does not match
    /// * `Internal` - any other storage, hashing, or signing fault
    pub async fn authorize(&self, request: AuthenticationRequest) -> Result<AccessToken, AuthError> {
        self.observer
            .flow_started(FLOW_AUTHENTICATION, &request.username);

        let result = self.try_authorize(&request).await;
        match &result {
            Ok(_) => self
                .observer
                .flow_succeeded(FLOW_AUTHENTICATION, &request.username),
            Err(err) => self
                .observer
                .flow_failed(FLOW_AUTHENTICATION, &request.username, err),
        }

        result
    }

    async fn try_register(&self, request: &RegistrationRequest) -> Result<String, AuthError> {
        validate_credentials_input(&request.username, &request.password)?;

        let password_hash = self.hasher.hash(&request.password).await.map_err(|err| {
            tracing::error!("password hashing failed: {err}");
            AuthError::internal("Failed to create user.")
        })?;

        let credential = self
            .store
            .insert(NewCredential {
                username: request.username.clone(),
                password_hash,
            })
            .await
            .map_err(|err| match err {
                StoreError::DuplicateUsername => AuthError::DuplicateUsername,
                StoreError::Storage(detail) => {
                    tracing::error!("credential insert failed: {detail}");
                    AuthError::internal("Failed to create user.")
                }
            })?;

        Ok(credential.username)
    }

    async fn try_authorize(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AccessToken, AuthError> {
        let credential = self
            .store
            .find_by_username(&request.username)
            .await
            .map_err(|err| {
                tracing::error!("credential lookup failed: {err}");
                AuthError::internal("Internal Server Error")
            })?
            .ok_or(AuthError::NotFound)?;

        let matched = self
            .hasher
            .verify(&request.password, &credential.password_hash)
            .await
            .map_err(|err| {
                tracing::error!("password verification failed: {err}");
                AuthError::internal("Internal Server Error")
            })?;

        if !matched {
            return Err(AuthError::Unauthorized);
        }

        let token = self
            .issuer
            .issue(credential.id, &credential.username)
            .map_err(|err| {
                tracing::error!("token issuance failed: {err}");
                AuthError::internal("Internal Server Error")
            })?;

        Ok(AccessToken {
            access_token: token,
        })
    }
}

/// Fail fast on empty input, before any hashing or storage access
fn validate_credentials_input(username: &str, password: &str) -> Result<(), AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::Validation);
    }
    Ok(())
}
