use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use metrics::{counter, histogram};
use regex::Regex;
use thiserror::Error;

use crate::agent::{AgentAssessor, AgentConfig, AgentError, RiskAssessor};
use crate::analysis::{
    compute_score, ChainMetricsCollector, ContractReadError, MarkerParser, MetricsSource,
    ScoringConfig, TextAnalysisParser,
};
use crate::config::AppConfig;
use crate::models::SafetyAnalysisResult;
use crate::starknet::StarknetRpcClient;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid contract address '{0}'")]
    InvalidAddress(String),

    #[error(transparent)]
    ContractRead(#[from] ContractReadError),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

/// Starknet addresses are felts: 0x followed by up to 64 hex digits.
fn is_contract_address(text: &str) -> bool {
    Regex::new(r"^0x[a-fA-F0-9]{1,64}$").unwrap().is_match(text)
}

/// The analysis pipeline: collect → assess → extract → score.
///
/// Strictly linear per request with exactly one success and one failure
/// terminal state. Holds no mutable state across requests; the only
/// long-lived piece is the assessor's once-initialized client handle.
pub struct TokenAnalyzer {
    collector: Arc<dyn MetricsSource>,
    assessor: Arc<dyn RiskAssessor>,
    parser: Box<dyn TextAnalysisParser>,
    scoring: ScoringConfig,
}

impl TokenAnalyzer {
    pub fn new(
        collector: Arc<dyn MetricsSource>,
        assessor: Arc<dyn RiskAssessor>,
        parser: Box<dyn TextAnalysisParser>,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            collector,
            assessor,
            parser,
            scoring,
        }
    }

    /// Wire up the production boundaries from application config.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let rpc = StarknetRpcClient::new(config.rpc_url.clone(), config.rpc_timeout)?;
        let assessor = AgentAssessor::new(AgentConfig {
            base_url: config.agent_base_url.clone(),
            api_key: config.agent_api_key.clone(),
            llm_api_key: config.llm_api_key.clone(),
            model: config.agent_model.clone(),
            timeout: config.agent_timeout,
        });

        Ok(Self::new(
            Arc::new(ChainMetricsCollector::new(rpc)),
            Arc::new(assessor),
            Box::new(MarkerParser::new()),
            ScoringConfig::default(),
        ))
    }

    /// Run one full analysis. Any stage failure aborts the request; in
    /// particular a failed chain read means the agent is never contacted.
    pub async fn analyze_token(
        &self,
        contract_address: &str,
    ) -> Result<SafetyAnalysisResult, AnalyzeError> {
        let started = Instant::now();
        counter!("analyses_total").increment(1);

        let result = self.run(contract_address).await;

        match &result {
            Ok(r) => {
                histogram!("analysis_latency_seconds").record(started.elapsed().as_secs_f64());
                tracing::info!(
                    contract = %contract_address,
                    score = r.safety_score,
                    risks = r.risks.len(),
                    "Analysis complete"
                );
            }
            Err(e) => {
                counter!("analyses_failed").increment(1);
                tracing::warn!(contract = %contract_address, error = %e, "Analysis failed");
            }
        }

        result
    }

    async fn run(&self, contract_address: &str) -> Result<SafetyAnalysisResult, AnalyzeError> {
        if !is_contract_address(contract_address) {
            return Err(AnalyzeError::InvalidAddress(contract_address.to_string()));
        }

        tracing::info!(contract = %contract_address, "Analyzing token");

        let profile = self.collector.collect(contract_address).await?;

        let analysis = self
            .assessor
            .assess(contract_address, &profile.metrics)
            .await?;

        let risks = self.parser.extract_risks(&analysis);
        let recommendations = self.parser.extract_recommendations(&analysis);
        let safety_score = compute_score(&profile.metrics, &self.scoring);

        Ok(SafetyAnalysisResult {
            contract_address: contract_address.to_string(),
            token_name: profile.name,
            token_symbol: profile.symbol,
            safety_score,
            risks,
            recommendations,
            token_metrics: profile.metrics,
            analyzed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_address_validation() {
        assert!(is_contract_address("0xABC"));
        assert!(is_contract_address(
            "0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7"
        ));
        assert!(!is_contract_address("049d3657"));
        assert!(!is_contract_address("0x"));
        assert!(!is_contract_address("0xNOTHEX"));
        assert!(!is_contract_address(""));
    }
}
