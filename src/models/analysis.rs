use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::token::TokenMetrics;

/// Terminal output of one analysis request. Built once, never mutated,
/// not persisted anywhere — it lives only in the response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAnalysisResult {
    pub contract_address: String,
    pub token_name: String,
    pub token_symbol: String,
    /// Integer in [0, 100]; higher is safer.
    pub safety_score: u8,
    /// Risk statements in the order the agent emitted them.
    pub risks: Vec<String>,
    /// Recommendation statements in the order the agent emitted them.
    pub recommendations: Vec<String>,
    pub token_metrics: TokenMetrics,
    pub analyzed_at: DateTime<Utc>,
}
