use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::db::StoreError;

pub const MSG_FIELDS_REQUIRED: &str =
    "Todos os campos (name, sku, quantity, price) são obrigatórios.";
pub const MSG_NOT_FOUND: &str = "Produto não encontrado";
pub const MSG_NO_TOKEN: &str = "Autenticação falhou: Nenhum token fornecido.";
pub const MSG_BAD_TOKEN: &str = "Autenticação falhou: Token inválido.";
pub const MSG_BAD_CREDENTIALS: &str = "Credenciais inválidas";
pub const MSG_SERVER_ERROR: &str = "Erro no servidor";

/// Everything a handler can fail with. The detail carried by each variant is
/// logged, never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("no bearer token supplied")]
    MissingToken,
    #[error("token rejected: {0}")]
    InvalidToken(String),
    #[error("invalid credentials for user {0:?}")]
    InvalidCredentials(String),
    #[error("product {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingToken
            | ApiError::InvalidToken(_)
            | ApiError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => MSG_FIELDS_REQUIRED,
            ApiError::MissingToken => MSG_NO_TOKEN,
            ApiError::InvalidToken(_) => MSG_BAD_TOKEN,
            ApiError::InvalidCredentials(_) => MSG_BAD_CREDENTIALS,
            ApiError::NotFound(_) => MSG_NOT_FOUND,
            ApiError::Store(_) | ApiError::Internal(_) => MSG_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, %status, "request failed");
            return (status, MSG_SERVER_ERROR).into_response();
        }
        warn!(error = %self, %status, "request rejected");
        (status, Json(json!({ "message": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_taxonomy() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidToken("x".into()).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidCredentials("bob".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::NotFound("7".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(StoreError::Query("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn server_errors_hide_detail() {
        let res = ApiError::from(StoreError::Query("relation \"products\" does not exist".into()))
            .into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let ct = res.headers().get(axum::http::header::CONTENT_TYPE).unwrap();
        assert!(ct.to_str().unwrap().starts_with("text/plain"));
    }
}
