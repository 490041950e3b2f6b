use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::SafetyAnalysisResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub contract_address: String,
}

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// The single inbound operation: analyze a token contract and return the
/// full safety record. Failures map to status codes in `AppError` with the
/// human-readable message preserved for the UI.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<SafetyAnalysisResult>>, AppError> {
    let result = state
        .analyzer
        .analyze_token(req.contract_address.trim())
        .await?;

    Ok(Json(ApiResponse {
        success: true,
        data: Some(result),
        error: None,
    }))
}
