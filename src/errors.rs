use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::agent::AgentError;
use crate::services::AnalyzeError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Upstream timeout: {0}")]
    UpstreamTimeout(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::UpstreamTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".into()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

// Every pipeline failure reaches the caller with its message text intact;
// the status code is the only thing the mapping adds.
impl From<AnalyzeError> for AppError {
    fn from(e: AnalyzeError) -> Self {
        match &e {
            AnalyzeError::InvalidAddress(_) => AppError::BadRequest(e.to_string()),
            AnalyzeError::ContractRead(_) => AppError::Upstream(e.to_string()),
            AnalyzeError::Agent(AgentError::Timeout(_)) => AppError::UpstreamTimeout(e.to_string()),
            AnalyzeError::Agent(AgentError::Unavailable(_)) => AppError::Upstream(e.to_string()),
        }
    }
}
