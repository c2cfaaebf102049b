/**
 * Authentication Handler
 *
 * Handler for POST /auth/authorize.
 *
 * # Responses
 *
 * * `200 OK` - body carries `access_token`
 * * `404 Not Found` - no credential for this username
 * * `401 Unauthorized` - password mismatch
 * * `500 Internal Server Error` - storage, hashing, or signing fault
 *
 * Unknown username and wrong password are deliberately distinct outcomes.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AccessToken, AuthenticationRequest};
use crate::auth::service::AuthService;
use crate::error::AuthError;

pub async fn authorize_user(
    State(auth): State<Arc<AuthService>>,
    Json(request): Json<AuthenticationRequest>,
) -> Result<Json<AccessToken>, AuthError> {
    let token = auth.authorize(request).await?;
    Ok(Json(token))
}
