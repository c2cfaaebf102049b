/**
 * Authentication Handler Types
 *
 * Wire types for the authentication endpoints. The request bodies are the
 * flow inputs themselves; the responses are defined here.
 */

use serde::Serialize;

pub use crate::auth::service::{AccessToken, AuthenticationRequest, RegistrationRequest};

/// Registration response: the stored username, nothing else
///
/// No credential ID, no hash.
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub username: String,
}
