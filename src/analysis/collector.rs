use alloy::primitives::U256;
use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{LiquidityMetrics, OwnershipMetrics, TokenMetrics};
use crate::starknet::{Erc20Contract, Erc20Error, StarknetRpcClient};

#[derive(Debug, Error)]
pub enum ContractReadError {
    #[error("contract read failed: {0}")]
    Read(#[from] Erc20Error),
}

/// Identity plus metrics for one analyzed token. The name/symbol ride along
/// with the metrics so the pipeline does one collection pass per request.
#[derive(Debug, Clone)]
pub struct TokenProfile {
    pub name: String,
    pub symbol: String,
    pub metrics: TokenMetrics,
}

/// Boundary seam for the metrics-collection stage. A failed read aborts the
/// whole analysis — scoring on partial metrics is a security hazard, so no
/// implementation may return a partially-populated record.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn collect(&self, contract_address: &str) -> Result<TokenProfile, ContractReadError>;
}

/// Production collector backed by read-only `starknet_call` requests.
#[derive(Debug, Clone)]
pub struct ChainMetricsCollector {
    rpc: StarknetRpcClient,
}

impl ChainMetricsCollector {
    pub fn new(rpc: StarknetRpcClient) -> Self {
        Self { rpc }
    }
}

#[async_trait]
impl MetricsSource for ChainMetricsCollector {
    async fn collect(&self, contract_address: &str) -> Result<TokenProfile, ContractReadError> {
        let contract = Erc20Contract::new(self.rpc.clone(), contract_address);

        let name = contract.name().await?;
        let symbol = contract.symbol().await?;
        let total_supply = contract.total_supply().await?;
        let circulating_supply = contract.circulating_supply().await?;
        let owner = contract.owner().await?;

        let renounced = crate::starknet::erc20::is_zero_felt(&owner);
        let ownership_percentage = if renounced {
            Decimal::ZERO
        } else {
            let owner_balance = contract.balance_of(&owner).await?;
            ownership_percentage(owner_balance, total_supply)
        };

        tracing::debug!(
            contract = %contract_address,
            total_supply = %total_supply,
            owner = %owner,
            renounced,
            ownership_pct = %ownership_percentage,
            "Collected token metrics"
        );

        Ok(TokenProfile {
            name,
            symbol,
            metrics: TokenMetrics {
                total_supply: total_supply.to_string(),
                circulating_supply: circulating_supply.to_string(),
                // Holder counting and liquidity-lock state need an indexer;
                // neither is readable via starknet_call alone. The scorer
                // treats these literal values as the risk conditions they
                // represent.
                holders_count: 0,
                liquidity_metrics: LiquidityMetrics {
                    total_liquidity: "0".into(),
                    liquidity_locked: "0".into(),
                    lock_period: 0,
                },
                ownership_metrics: OwnershipMetrics {
                    owner_address: owner,
                    ownership_percentage,
                    renounced,
                },
            },
        })
    }
}

/// Owner's share of total supply as a percentage in [0, 100].
///
/// Computed in integer basis points so arbitrarily large supplies never pass
/// through a float. Tokens where the owner balance exceeds total supply
/// (rebasing oddities) clamp to 100.
fn ownership_percentage(owner_balance: U256, total_supply: U256) -> Decimal {
    if total_supply.is_zero() {
        return Decimal::ZERO;
    }
    let bps = (owner_balance.saturating_mul(U256::from(10_000u64))) / total_supply;
    let bps: i64 = bps.try_into().unwrap_or(10_000).min(10_000);
    Decimal::new(bps, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_percentage_basic() {
        let pct = ownership_percentage(U256::from(600u64), U256::from(1000u64));
        assert_eq!(pct, Decimal::from(60));
    }

    #[test]
    fn test_ownership_percentage_fractional() {
        // 1234 / 100000 = 1.23% (truncated to basis points)
        let pct = ownership_percentage(U256::from(1234u64), U256::from(100_000u64));
        assert_eq!(pct, Decimal::new(123, 2));
    }

    #[test]
    fn test_ownership_percentage_zero_supply() {
        assert_eq!(
            ownership_percentage(U256::from(5u64), U256::ZERO),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_ownership_percentage_clamps_at_hundred() {
        let pct = ownership_percentage(U256::from(2000u64), U256::from(1000u64));
        assert_eq!(pct, Decimal::from(100));
    }

    #[test]
    fn test_ownership_percentage_huge_supply() {
        // 10^27 total supply (1B tokens at 18 decimals), owner holds half.
        let total = U256::from(10u64).pow(U256::from(27u64));
        let half = total / U256::from(2u64);
        assert_eq!(ownership_percentage(half, total), Decimal::from(50));
    }
}
