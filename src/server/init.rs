/**
 * Server Initialization
 *
 * Wires the concrete collaborators into the credential service and builds
 * the router.
 *
 * # Initialization Steps
 *
 * 1. Select the credential store: PostgreSQL when `DATABASE_URL` is
 *    configured and reachable, otherwise the in-memory store
 * 2. Construct the bcrypt hasher and the JWT issuer from configuration
 * 3. Assemble the `AuthService` and application state
 * 4. Build the router
 *
 * A missing or unreachable database does not prevent startup; the server
 * falls back to the in-memory store with a warning, and credentials then
 * live only as long as the process.
 */

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::auth::handlers::{authorize_user, create_user};
use crate::auth::hasher::BcryptHasher;
use crate::auth::service::AuthService;
use crate::auth::store::memory::MemoryCredentialStore;
use crate::auth::store::postgres::PgCredentialStore;
use crate::auth::store::CredentialStore;
use crate::auth::tokens::JwtIssuer;
use crate::server::config::{connect_database, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Router {
    tracing::info!("Initializing authgate server");

    let store: Arc<dyn CredentialStore> = match &config.database_url {
        Some(url) => match connect_database(url).await {
            Ok(pool) => Arc::new(PgCredentialStore::new(pool)),
            Err(e) => {
                tracing::error!("Failed to connect to database: {e}");
                tracing::warn!("Falling back to in-memory credential store");
                Arc::new(MemoryCredentialStore::new())
            }
        },
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory credential store");
            Arc::new(MemoryCredentialStore::new())
        }
    };

    let hasher = Arc::new(BcryptHasher::new());
    let issuer = Arc::new(JwtIssuer::new(&config.jwt_secret, config.token_ttl));
    let auth = Arc::new(AuthService::new(store, hasher, issuer));

    create_router(AppState { auth })
}

/// Build the router over a prepared state
///
/// Routes:
///
/// - `POST /auth/create` - register a new credential
/// - `POST /auth/authorize` - verify credentials and issue a token
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/auth/create", post(create_user))
        .route("/auth/authorize", post(authorize_user))
        .with_state(state)
}
