/**
 * Registration Handler
 *
 * Handler for POST /auth/create.
 *
 * # Responses
 *
 * * `200 OK` - credential stored; body carries the username
 * * `400 Bad Request` - empty or missing username/password
 * * `409 Conflict` - username already taken
 * * `500 Internal Server Error` - storage or hashing fault
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{CreatedUser, RegistrationRequest};
use crate::auth::service::AuthService;
use crate::error::AuthError;

pub async fn create_user(
    State(auth): State<Arc<AuthService>>,
    Json(request): Json<RegistrationRequest>,
) -> Result<Json<CreatedUser>, AuthError> {
    let username = auth.register(request).await?;
    Ok(Json(CreatedUser { username }))
}
