use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;
use time::OffsetDateTime;
use tracing::error;

use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/db-check", get(db_check))
}

#[derive(Debug, Serialize)]
struct DbCheck {
    status: &'static str,
    #[serde(rename = "dbTime", with = "time::serde::rfc3339")]
    db_time: OffsetDateTime,
    message: &'static str,
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "message": "API rodando 🚀" }))
}

/// Diagnostic route; the only one that returns store error detail.
pub async fn db_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.server_time().await {
        Ok(db_time) => Json(DbCheck {
            status: "ok",
            db_time,
            message: "Banco funcionando ✅",
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, "db-check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": "Falha na conexão com o banco ❌",
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::app::test_util::send;
    use crate::state::AppState;

    #[tokio::test]
    async fn health_is_ok() {
        let (state, _) = AppState::fake();
        let (status, body) = send(state, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn db_check_reports_unreachable_store() {
        let (state, _) = AppState::fake();
        let (status, body) = send(state, Method::GET, "/db-check", None, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
        assert!(!body["error"].as_str().unwrap_or_default().is_empty());
    }
}
