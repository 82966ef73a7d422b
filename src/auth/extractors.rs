use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use super::{claims::Claims, jwt::JwtKeys};
use crate::error::ApiError;

/// Verified caller of a protected route; rejects the request with 401 when
/// the bearer token is absent, malformed, badly signed or expired.
pub struct AuthUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        // Expect "Bearer <token>"
        let mut words = header.split_whitespace();
        let scheme = words.next();
        let token = words.next().ok_or(ApiError::MissingToken)?;
        if !scheme.is_some_and(|s| s.eq_ignore_ascii_case("bearer")) {
            return Err(ApiError::InvalidToken("unsupported auth scheme".into()));
        }

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "invalid or expired token");
            ApiError::InvalidToken(e.to_string())
        })?;
        Ok(AuthUser(claims))
    }
}
