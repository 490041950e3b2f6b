use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// On-chain metrics snapshot for a single token contract.
///
/// Supply figures are base-10 big-integer strings: token amounts routinely
/// exceed what fits in a float or an i64, so they stay textual end to end.
/// Serialized field names are camelCase to match the wire shape the
/// dashboard consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetrics {
    pub total_supply: String,
    pub circulating_supply: String,
    pub holders_count: u64,
    pub liquidity_metrics: LiquidityMetrics,
    pub ownership_metrics: OwnershipMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityMetrics {
    pub total_liquidity: String,
    /// Amount of liquidity under a lock, as a big-integer string.
    pub liquidity_locked: String,
    /// Lock duration in seconds; 0 when nothing is locked.
    pub lock_period: u64,
}

impl LiquidityMetrics {
    /// True when a non-zero amount of liquidity is locked.
    /// `"0"`, `""` and all-zero strings all count as unlocked.
    pub fn is_locked(&self) -> bool {
        let s = self.liquidity_locked.trim();
        !s.is_empty() && s.chars().any(|c| c != '0')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipMetrics {
    pub owner_address: String,
    /// Share of total supply held by the owner, in [0, 100].
    pub ownership_percentage: Decimal,
    pub renounced: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn liquidity(locked: &str) -> LiquidityMetrics {
        LiquidityMetrics {
            total_liquidity: "0".into(),
            liquidity_locked: locked.into(),
            lock_period: 0,
        }
    }

    #[test]
    fn test_liquidity_locked_detection() {
        assert!(!liquidity("0").is_locked());
        assert!(!liquidity("").is_locked());
        assert!(!liquidity("000").is_locked());
        assert!(liquidity("1").is_locked());
        assert!(liquidity("5000000000000000000").is_locked());
    }

    #[test]
    fn test_metrics_wire_shape_is_camel_case() {
        let metrics = TokenMetrics {
            total_supply: "1000".into(),
            circulating_supply: "900".into(),
            holders_count: 42,
            liquidity_metrics: liquidity("0"),
            ownership_metrics: OwnershipMetrics {
                owner_address: "0x1".into(),
                ownership_percentage: Decimal::from(60),
                renounced: false,
            },
        };

        let json = serde_json::to_value(&metrics).unwrap();
        assert!(json.get("totalSupply").is_some());
        assert!(json.get("holdersCount").is_some());
        assert!(json["liquidityMetrics"].get("liquidityLocked").is_some());
        assert!(json["ownershipMetrics"].get("ownershipPercentage").is_some());
    }
}
