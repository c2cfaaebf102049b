//! Server Module
//!
//! Configuration loading, application state, and server wiring.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - Environment-driven configuration, database pool
//! ├── state.rs  - Application state for Axum extraction
//! └── init.rs   - Collaborator wiring and router construction
//! ```

/// Configuration loading and database connection
pub mod config;

/// Application state
pub mod state;

/// Application initialization and routing
pub mod init;
