//! HTTP Handlers for Authentication Endpoints
//!
//! One handler per endpoint, plus shared request/response types. The
//! handlers only deserialize the body, delegate to the flows, and let
//! `AuthError: IntoResponse` map the outcome:
//!
//! - `POST /auth/create` - register a new credential
//! - `POST /auth/authorize` - verify credentials and issue a token

/// Registration handler
pub mod create;

/// Authentication handler
pub mod authorize;

/// Request/response types
pub mod types;

// Re-export handlers for route configuration
pub use authorize::authorize_user;
pub use create::create_user;
