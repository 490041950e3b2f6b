use crate::models::TokenMetrics;

/// Standing instructions handed to the agent session at initialization.
pub const AGENT_INSTRUCTIONS: &str = "Analyze memecoin contracts for security risks and compliance \
with unruggable standards. Focus on: liquidity locks, ownership structure, supply distribution, \
and potential backdoors.";

/// Build the per-request analysis prompt: the contract address plus the
/// collected metrics as pretty-printed JSON, followed by the evaluation axes
/// the agent is asked to cover.
pub fn build_analysis_prompt(contract_address: &str, metrics: &TokenMetrics) -> String {
    let metrics_json =
        serde_json::to_string_pretty(metrics).unwrap_or_else(|_| "{}".to_string());

    format!(
        "Analyze the following memecoin contract for security risks:\n\
         Contract Address: {contract_address}\n\
         Token Metrics: {metrics_json}\n\
         \n\
         Evaluate:\n\
         1. Liquidity configuration and locks\n\
         2. Ownership structure and privileges\n\
         3. Supply distribution\n\
         4. Anti-bot measures\n\
         5. Potential backdoors or malicious code\n\
         6. Historical pattern matching with known rug pulls"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LiquidityMetrics, OwnershipMetrics};
    use rust_decimal::Decimal;

    #[test]
    fn test_prompt_embeds_address_and_metrics() {
        let metrics = TokenMetrics {
            total_supply: "1000000".into(),
            circulating_supply: "900000".into(),
            holders_count: 12,
            liquidity_metrics: LiquidityMetrics {
                total_liquidity: "0".into(),
                liquidity_locked: "0".into(),
                lock_period: 0,
            },
            ownership_metrics: OwnershipMetrics {
                owner_address: "0xabc".into(),
                ownership_percentage: Decimal::from(75),
                renounced: false,
            },
        };

        let prompt = build_analysis_prompt("0xDEADBEEF", &metrics);
        assert!(prompt.contains("Contract Address: 0xDEADBEEF"));
        assert!(prompt.contains("\"totalSupply\": \"1000000\""));
        assert!(prompt.contains("Historical pattern matching"));
    }
}
