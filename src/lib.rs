pub mod agent;
pub mod analysis;
pub mod api;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod services;
pub mod starknet;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::TokenAnalyzer;
use crate::starknet::StarknetRpcClient;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub analyzer: Arc<TokenAnalyzer>,
    pub rpc: StarknetRpcClient,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
