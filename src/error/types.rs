/**
 * Auth Error Types
 *
 * The five outcome classes visible past the flows. The display strings
 * are the complete outward messages: they are fixed per variant (the
 * internal variant carries one of two stable messages chosen by the
 * failing flow) and never vary with backend detail. Whatever a driver or
 * library reported is logged where it happened and goes no further.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Outcome taxonomy for the registration and authentication flows
#[derive(Debug, Error)]
pub enum AuthError {
    /// Caller input malformed; raised before any storage access
    #[error("Missing username or password.")]
    Validation,

    /// A credential with this username already exists
    #[error("Username is already taken.")]
    DuplicateUsername,

    /// No credential for this username
    #[error("User could not be found")]
    NotFound,

    /// The password does not match the stored hash
    #[error("User not authorized")]
    Unauthorized,

    /// Unexpected storage, hashing, or signing fault
    #[error("{message}")]
    Internal {
        /// Stable outward message; the diagnostic detail stays in the log
        message: String,
    },
}

impl AuthError {
    /// Create an internal failure with a stable outward message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The HTTP status code for this outcome
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `DuplicateUsername` - 409 Conflict
    /// - `NotFound` - 404 Not Found
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::DuplicateUsername => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_code_mapping() {
        assert_eq!(AuthError::Validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::DuplicateUsername.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(AuthError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_are_fixed_per_variant() {
        assert_eq!(
            AuthError::Validation.to_string(),
            "Missing username or password."
        );
        assert_eq!(
            AuthError::DuplicateUsername.to_string(),
            "Username is already taken."
        );
        assert_eq!(AuthError::NotFound.to_string(), "User could not be found");
        assert_eq!(AuthError::Unauthorized.to_string(), "User not authorized");
    }

    #[test]
    fn internal_carries_the_supplied_message() {
        let err = AuthError::internal("Failed to create user.");
        assert_eq!(err.to_string(), "Failed to create user.");
    }
}
