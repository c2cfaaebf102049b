/**
 * Access Token Issuance
 *
 * This module signs a small claims payload into an expiring JWT. The
 * signing secret and token lifetime are injected configuration, supplied
 * once at startup. Issuance is the whole contract here; anything that
 * needs to verify a token does so on its own side of the boundary.
 */

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Credential ID
    pub sub: String,
    /// Username
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Token issuance failures
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signing failed: {0}")]
    Signing(String),

    #[error("system clock is before the unix epoch")]
    Clock,
}

/// Signs claims into an opaque, tamper-evident bearer token
pub trait TokenIssuer: Send + Sync {
    /// Issue a token for the given credential, expiring after the
    /// configured lifetime.
    fn issue(&self, subject: Uuid, username: &str) -> Result<String, TokenError>;
}

/// HS256 JWT issuer with a fixed secret and lifetime
pub struct JwtIssuer {
    key: EncodingKey,
    ttl: Duration,
}

impl JwtIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_ref()),
            ttl,
        }
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, subject: Uuid, username: &str) -> Result<String, TokenError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| TokenError::Clock)?
            .as_secs();

        let claims = Claims {
            sub: subject.to_string(),
            username: username.to_string(),
            exp: now + self.ttl.as_secs(),
            iat: now,
        };

        encode(&Header::default(), &claims, &self.key).map_err(|e| TokenError::Signing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use pretty_assertions::assert_eq;

    const SECRET: &str = "test-secret";

    fn decode_claims(token: &str) -> Claims {
        let key = DecodingKey::from_secret(SECRET.as_ref());
        decode::<Claims>(token, &key, &Validation::default())
            .unwrap()
            .claims
    }

    #[test]
    fn issue_produces_nonempty_token() {
        let issuer = JwtIssuer::new(SECRET, Duration::from_secs(60));
        let token = issuer.issue(Uuid::new_v4(), "alice").unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn token_embeds_subject_and_username() {
        let issuer = JwtIssuer::new(SECRET, Duration::from_secs(60));
        let id = Uuid::new_v4();

        let token = issuer.issue(id, "alice").unwrap();
        let claims = decode_claims(&token);

        assert_eq!(claims.sub, id.to_string());
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn expiry_follows_configured_lifetime() {
        let issuer = JwtIssuer::new(SECRET, Duration::from_secs(60));
        let token = issuer.issue(Uuid::new_v4(), "alice").unwrap();

        let claims = decode_claims(&token);
        assert_eq!(claims.exp, claims.iat + 60);
    }

    #[test]
    fn token_is_rejected_under_a_different_secret() {
        let issuer = JwtIssuer::new(SECRET, Duration::from_secs(60));
        let token = issuer.issue(Uuid::new_v4(), "alice").unwrap();

        let other_key = DecodingKey::from_secret(b"another-secret");
        let result = decode::<Claims>(&token, &other_key, &Validation::default());
        assert!(result.is_err());
    }
}
