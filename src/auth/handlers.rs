use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{LoginRequest, LoginResponse, SecureResponse},
    extractors::AuthUser,
    jwt::JwtKeys,
};
use crate::{error::ApiError, state::AppState};

pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Protected probe route, mounted next to the product routes.
pub fn secure_routes() -> Router<AppState> {
    Router::new().route("/secure", get(secure))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let payload = match payload {
        Ok(Json(p)) => p,
        Err(e) => {
            warn!(error = %e, "unreadable login body");
            LoginRequest::default()
        }
    };

    let identity = state
        .credentials
        .verify(&payload.username, &payload.password)
        .ok_or_else(|| ApiError::InvalidCredentials(payload.username.clone()))?;

    let token = JwtKeys::from_ref(&state)
        .sign(&identity)
        .map_err(|e| ApiError::Internal(format!("jwt sign failed: {e}")))?;

    info!(user_id = %identity.id, username = %identity.username, "user logged in");
    Ok(Json(LoginResponse { token }))
}

pub async fn secure(AuthUser(user): AuthUser) -> Json<SecureResponse> {
    info!(username = %user.username, "secure route accessed");
    Json(SecureResponse {
        message: "Acesso autorizado à rota segura!",
        user,
    })
}
