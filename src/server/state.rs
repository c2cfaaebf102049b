/**
 * Application State
 *
 * `AppState` is the state container handed to the router. It holds the
 * fully wired `AuthService`; the `FromRef` implementation lets handlers
 * extract `Arc<AuthService>` directly, following Axum's substate pattern.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::service::AuthService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The credential service with its injected collaborators
    pub auth: Arc<AuthService>,
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
