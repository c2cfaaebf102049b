//! Authgate - Main Library
//!
//! Authgate is a small credential service: it registers username/password
//! pairs, stores passwords irreversibly hashed, and verifies login attempts,
//! issuing a signed, time-limited access token on success.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`auth`** - The credential lifecycle
//!   - `store` - Credential model and the `CredentialStore` contract
//!     (PostgreSQL and in-memory implementations)
//!   - `hasher` - Salted one-way password hashing (bcrypt)
//!   - `tokens` - Access token issuance (JWT)
//!   - `service` - The registration and authentication flows
//!   - `handlers` - HTTP handlers for the two endpoints
//!
//! - **`error`** - The outward error taxonomy and its HTTP mapping
//!
//! - **`server`** - Configuration, application state, and server wiring
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::server::config::ServerConfig;
//! use authgate::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! // Serve `app` with Axum
//! # Ok(())
//! # }
//! ```

/// Credential lifecycle: store, hashing, tokens, flows, handlers
pub mod auth;

/// Error taxonomy and HTTP response conversion
pub mod error;

/// Configuration, state, and server initialization
pub mod server;
