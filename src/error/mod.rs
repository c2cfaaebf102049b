//! Error Module
//!
//! This module defines the outward error taxonomy for the credential
//! service and its conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Taxonomy
//!
//! - `Validation` - caller input malformed; detected before storage access
//! - `DuplicateUsername` - uniqueness violation on registration
//! - `NotFound` - no credential for the username, on authentication
//! - `Unauthorized` - password mismatch
//! - `Internal` - any unexpected storage/hash/signing fault
//!
//! Each outcome maps to one stable status code and one fixed message; no
//! driver codes or stack traces cross this boundary.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
