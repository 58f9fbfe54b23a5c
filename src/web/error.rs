use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Failure modes of the kiosk's HTTP layer.
///
/// Clients only ever see a generic body; the detail goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum KioskError {
    #[error("database error")]
    Database(#[from] anyhow::Error),
}

impl IntoResponse for KioskError {
    fn into_response(self) -> Response {
        match &self {
            KioskError::Database(e) => error!("query failed: {e:?}"),
        }

        let body = serde_json::json!({
            "error": "internal server error",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
