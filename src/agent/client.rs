use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use super::prompt::AGENT_INSTRUCTIONS;

#[derive(Debug, Error)]
pub enum AgentError {
    /// The agent service cannot be reached, rejected our credentials, or
    /// reported an internal failure. Callers may retry with backoff; the
    /// core never retries internally.
    #[error("agent service unavailable: {0}")]
    Unavailable(String),

    /// The agent did not answer within the configured deadline.
    #[error("agent request timed out after {0:?}")]
    Timeout(Duration),
}

/// Connection settings for the external AI-agent service.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub base_url: String,
    pub api_key: String,
    pub llm_api_key: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct AgentResponse {
    output: String,
}

/// HTTP client for the agent service. Holds no per-request state; one
/// instance is built lazily per process and reused for every analysis.
#[derive(Debug, Clone)]
pub struct AgentClient {
    http: Client,
    config: AgentConfig,
}

impl AgentClient {
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AgentError::Unavailable(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Send one prompt and return the agent's free-text answer verbatim.
    /// The text is an opaque boundary value; nothing downstream assumes
    /// structure beyond the marker conventions of the parser.
    pub async fn invoke(&self, prompt: &str) -> Result<String, AgentError> {
        let url = format!("{}/agent", self.config.base_url.trim_end_matches('/'));

        let body = json!({
            "input": prompt,
            "model": self.config.model,
            "temperature": 0,
            "instructions": AGENT_INSTRUCTIONS,
        });

        let resp = self
            .http
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("x-llm-api-key", &self.config.llm_api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    AgentError::Unavailable("authentication rejected by agent service".into())
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    AgentError::Unavailable("agent service quota exhausted".into())
                }
                _ => AgentError::Unavailable(format!("agent service returned {status}")),
            });
        }

        let parsed: AgentResponse = resp
            .json()
            .await
            .map_err(|e| AgentError::Unavailable(format!("malformed agent response: {e}")))?;

        Ok(parsed.output)
    }

    fn classify(&self, e: reqwest::Error) -> AgentError {
        if e.is_timeout() {
            AgentError::Timeout(self.config.timeout)
        } else {
            AgentError::Unavailable(e.to_string())
        }
    }
}
