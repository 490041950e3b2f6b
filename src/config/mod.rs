use std::env;
use std::time::Duration;

const DEFAULT_RPC_URL: &str = "https://free-rpc.nethermind.io/mainnet-juno";
const DEFAULT_AGENT_BASE_URL: &str = "https://api.brianknows.org/api/v0";
const DEFAULT_AGENT_MODEL: &str = "gpt-4";

const DEFAULT_RPC_TIMEOUT_SECS: u64 = 10;
// Dominant availability risk is an unbounded hang on the agent call.
const DEFAULT_AGENT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Agent service credentials — both required before any network call.
    pub agent_api_key: String,
    pub llm_api_key: String,
    pub agent_base_url: String,
    pub agent_model: String,

    // Chain RPC
    pub rpc_url: String,

    // Boundary timeouts
    pub rpc_timeout: Duration,
    pub agent_timeout: Duration,

    /// Optional bearer token for the protected API routes.
    pub api_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,

            agent_api_key: env::var("AGENT_API_KEY")
                .map_err(|_| anyhow::anyhow!("AGENT_API_KEY must be set"))?,
            llm_api_key: env::var("LLM_API_KEY")
                .map_err(|_| anyhow::anyhow!("LLM_API_KEY must be set"))?,
            agent_base_url: env::var("AGENT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_AGENT_BASE_URL.into()),
            agent_model: env::var("AGENT_MODEL").unwrap_or_else(|_| DEFAULT_AGENT_MODEL.into()),

            rpc_url: env::var("STARKNET_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.into()),

            rpc_timeout: Duration::from_secs(
                env::var("RPC_TIMEOUT_SECS")
                    .unwrap_or_else(|_| DEFAULT_RPC_TIMEOUT_SECS.to_string())
                    .parse()
                    .unwrap_or(DEFAULT_RPC_TIMEOUT_SECS),
            ),
            agent_timeout: Duration::from_secs(
                env::var("AGENT_TIMEOUT_SECS")
                    .unwrap_or_else(|_| DEFAULT_AGENT_TIMEOUT_SECS.to_string())
                    .parse()
                    .unwrap_or(DEFAULT_AGENT_TIMEOUT_SECS),
            ),

            api_token: env::var("API_TOKEN").ok().filter(|t| !t.is_empty()),
        })
    }
}
