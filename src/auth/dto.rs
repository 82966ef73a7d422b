use serde::{Deserialize, Serialize};

use super::claims::Claims;

/// Request body for login. Missing fields are treated as empty strings so
/// they fail the credential check rather than body parsing.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Response of the protected probe route.
#[derive(Debug, Serialize)]
pub struct SecureResponse {
    pub message: &'static str,
    pub user: Claims,
}
