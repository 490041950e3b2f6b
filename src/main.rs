use std::sync::Arc;

use rugscan::api::create_router;
use rugscan::config::AppConfig;
use rugscan::metrics::init_metrics;
use rugscan::services::TokenAnalyzer;
use rugscan::starknet::StarknetRpcClient;
use rugscan::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    let metrics_handle = init_metrics();

    let analyzer = Arc::new(TokenAnalyzer::from_config(&config)?);
    let rpc = StarknetRpcClient::new(config.rpc_url.clone(), config.rpc_timeout)?;

    tracing::info!(
        rpc_url = %config.rpc_url,
        agent_base_url = %config.agent_base_url,
        model = %config.agent_model,
        "Analyzer initialized"
    );

    if config.api_token.is_none() {
        tracing::warn!("API_TOKEN not set — /api routes are unauthenticated");
    }

    let state = AppState {
        config,
        analyzer,
        rpc,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
