/// Server error types
use crate::models::ApiResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sonora_core::SonoraError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] SonoraError),
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl ServerError {
    /// HTTP status for this error kind: validation 400, missing 404, the rest 500
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Catalog(err) => match err {
                SonoraError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                SonoraError::NotFound { .. } => StatusCode::NOT_FOUND,
                SonoraError::Duplicate(_)
                | SonoraError::IdSpaceExhausted { .. }
                | SonoraError::Storage(_)
                | SonoraError::Database(_)
                | SonoraError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "request rejected");
        }

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = ServerError::from(SonoraError::invalid_input("id must not be empty"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "id must not be empty");
    }

    #[test]
    fn missing_entities_are_not_found() {
        let err = ServerError::from(SonoraError::not_found("Song", "s1"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Song not found: s1");
    }

    #[test]
    fn storage_failures_are_internal() {
        for err in [
            SonoraError::Database("disk I/O error".to_string()),
            SonoraError::Duplicate("UNIQUE constraint failed: songs.id".to_string()),
            SonoraError::IdSpaceExhausted { attempts: 5 },
        ] {
            assert_eq!(
                ServerError::from(err).status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[tokio::test]
    async fn response_body_uses_envelope() {
        let response = ServerError::BadRequest("bad json".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "ok": false, "error": "bad json" }));
    }
}
