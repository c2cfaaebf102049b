//! Authentication Module
//!
//! This module implements the credential lifecycle: registration of new
//! username/password pairs and verification of login attempts, ending in
//! a signed access token.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`store`** - Credential model and the `CredentialStore` contract
//! - **`hasher`** - Salted one-way password hashing and verification
//! - **`tokens`** - Signed, expiring access token issuance
//! - **`service`** - The registration and authentication flows
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── store/          - Credential model and store implementations
//! │   ├── mod.rs      - CredentialStore contract
//! │   ├── postgres.rs - PostgreSQL store (sqlx)
//! │   └── memory.rs   - In-memory store (no DATABASE_URL, tests)
//! ├── hasher.rs       - Password hashing (bcrypt)
//! ├── tokens.rs       - Access token issuance (JWT)
//! ├── service.rs      - Registration and authentication flows
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── create.rs   - Registration handler
//!     └── authorize.rs - Authentication handler
//! ```
//!
//! # Flow
//!
//! 1. **Create**: validate input → hash password → insert credential →
//!    return the stored username
//! 2. **Authorize**: look up credential → verify password → issue token
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (fresh salt per password) before storage
//! - Plaintext passwords are never logged, stored, or returned
//! - The store's unique index on `username` arbitrates concurrent
//!   registrations; the flows perform no check-then-act of their own

/// Credential model and store implementations
pub mod store;

/// Password hashing and verification
pub mod hasher;

/// Access token issuance
pub mod tokens;

/// Registration and authentication flows
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types
pub use service::{AccessToken, AuthService, AuthenticationRequest, RegistrationRequest};
pub use store::{Credential, CredentialStore};
