use async_trait::async_trait;
use tokio::sync::OnceCell;

use super::client::{AgentClient, AgentConfig, AgentError};
use super::prompt::build_analysis_prompt;
use crate::models::TokenMetrics;

/// Boundary seam for the risk-assessment stage: one prompt in, opaque
/// free text out. The pipeline only depends on this trait, so tests can
/// substitute a canned implementation.
#[async_trait]
pub trait RiskAssessor: Send + Sync {
    async fn assess(
        &self,
        contract_address: &str,
        metrics: &TokenMetrics,
    ) -> Result<String, AgentError>;
}

/// Production assessor backed by the external agent service.
///
/// The underlying `AgentClient` is built on first use and cached for the
/// life of the process. `OnceCell` makes first-use races converge on a
/// single handle; concurrent callers all observe the same client.
pub struct AgentAssessor {
    config: AgentConfig,
    client: OnceCell<AgentClient>,
}

impl AgentAssessor {
    pub fn new(config: AgentConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Get the shared client handle, initializing it exactly once.
    pub async fn client(&self) -> Result<&AgentClient, AgentError> {
        self.client
            .get_or_try_init(|| async {
                tracing::info!(base_url = %self.config.base_url, "Initializing agent client");
                AgentClient::new(self.config.clone())
            })
            .await
    }
}

#[async_trait]
impl RiskAssessor for AgentAssessor {
    async fn assess(
        &self,
        contract_address: &str,
        metrics: &TokenMetrics,
    ) -> Result<String, AgentError> {
        let client = self.client().await?;
        let prompt = build_analysis_prompt(contract_address, metrics);
        client.invoke(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config() -> AgentConfig {
        AgentConfig {
            base_url: "http://localhost:9".into(),
            api_key: "agent-key".into(),
            llm_api_key: "llm-key".into(),
            model: "gpt-4".into(),
            timeout: Duration::from_secs(30),
        }
    }

    #[tokio::test]
    async fn test_concurrent_first_use_yields_one_handle() {
        let assessor = std::sync::Arc::new(AgentAssessor::new(test_config()));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let assessor = assessor.clone();
            handles.push(tokio::spawn(async move {
                assessor.client().await.unwrap() as *const AgentClient as usize
            }));
        }

        let mut ptrs = Vec::new();
        for h in handles {
            ptrs.push(h.await.unwrap());
        }

        // Every task saw the same underlying client.
        assert!(ptrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[tokio::test]
    async fn test_repeated_init_returns_same_handle() {
        let assessor = AgentAssessor::new(test_config());
        let first = assessor.client().await.unwrap() as *const AgentClient;
        let second = assessor.client().await.unwrap() as *const AgentClient;
        assert_eq!(first, second);
    }
}
