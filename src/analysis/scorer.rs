use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TokenMetrics;

/// Penalty table for the safety score. Data, not branches: thresholds and
/// deductions live here so a deployment can tune them without touching the
/// scoring function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Ownership concentration above this percentage is penalized.
    pub max_ownership_pct: Decimal,
    pub ownership_penalty: i64,
    /// Deduction applied when no liquidity is locked.
    pub unlocked_liquidity_penalty: i64,
    /// Holder counts below this are penalized.
    pub min_holders: u64,
    pub low_holders_penalty: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_ownership_pct: Decimal::from(50),
            ownership_penalty: 30,
            unlocked_liquidity_penalty: 20,
            min_holders: 100,
            low_holders_penalty: 10,
        }
    }
}

/// Compute the safety score for a metrics record: start at 100, subtract
/// each triggered penalty independently, clamp into [0, 100].
///
/// This is a deterministic function of the metrics alone. The agent's text
/// analysis deliberately does not appear in the signature — reweighting the
/// score from analysis content is an open product question, and keeping the
/// input set visible in the types beats accepting a parameter nothing reads.
pub fn compute_score(metrics: &TokenMetrics, config: &ScoringConfig) -> u8 {
    let mut score: i64 = 100;

    if metrics.ownership_metrics.ownership_percentage > config.max_ownership_pct {
        score -= config.ownership_penalty;
    }
    if !metrics.liquidity_metrics.is_locked() {
        score -= config.unlocked_liquidity_penalty;
    }
    if metrics.holders_count < config.min_holders {
        score -= config.low_holders_penalty;
    }

    score.clamp(0, 100) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LiquidityMetrics, OwnershipMetrics};

    fn make_metrics(ownership_pct: i64, locked: &str, holders: u64) -> TokenMetrics {
        TokenMetrics {
            total_supply: "1000000000".into(),
            circulating_supply: "900000000".into(),
            holders_count: holders,
            liquidity_metrics: LiquidityMetrics {
                total_liquidity: "500000".into(),
                liquidity_locked: locked.into(),
                lock_period: if locked != "0" { 86_400 * 180 } else { 0 },
            },
            ownership_metrics: OwnershipMetrics {
                owner_address: "0xabc".into(),
                ownership_percentage: Decimal::from(ownership_pct),
                renounced: false,
            },
        }
    }

    #[test]
    fn test_clean_token_scores_full() {
        let metrics = make_metrics(10, "500000", 5_000);
        assert_eq!(compute_score(&metrics, &ScoringConfig::default()), 100);
    }

    #[test]
    fn test_high_ownership_caps_score_at_seventy() {
        // Ownership > 50% alone must bring the score to 70 or below.
        let metrics = make_metrics(60, "500000", 5_000);
        assert!(compute_score(&metrics, &ScoringConfig::default()) <= 70);
    }

    #[test]
    fn test_ownership_at_exactly_fifty_is_not_penalized() {
        let metrics = make_metrics(50, "500000", 5_000);
        assert_eq!(compute_score(&metrics, &ScoringConfig::default()), 100);
    }

    #[test]
    fn test_unlocked_liquidity_costs_exactly_twenty() {
        let locked = make_metrics(10, "500000", 5_000);
        let unlocked = make_metrics(10, "0", 5_000);

        let config = ScoringConfig::default();
        assert_eq!(
            compute_score(&locked, &config) - compute_score(&unlocked, &config),
            20
        );
    }

    #[test]
    fn test_all_penalties_stack_to_forty() {
        // The end-to-end reference case: 60% ownership, unlocked liquidity,
        // 50 holders → 100 - 30 - 20 - 10 = 40.
        let metrics = make_metrics(60, "0", 50);
        assert_eq!(compute_score(&metrics, &ScoringConfig::default()), 40);
    }

    #[test]
    fn test_holder_boundary() {
        let config = ScoringConfig::default();
        let at_minimum = make_metrics(10, "500000", 100);
        let below = make_metrics(10, "500000", 99);
        assert_eq!(compute_score(&at_minimum, &config), 100);
        assert_eq!(compute_score(&below, &config), 90);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let config = ScoringConfig {
            ownership_penalty: 60,
            unlocked_liquidity_penalty: 60,
            low_holders_penalty: 60,
            ..ScoringConfig::default()
        };
        let metrics = make_metrics(90, "0", 1);
        assert_eq!(compute_score(&metrics, &config), 0);
    }

    #[test]
    fn test_custom_penalty_table() {
        let config = ScoringConfig {
            max_ownership_pct: Decimal::from(25),
            ownership_penalty: 50,
            ..ScoringConfig::default()
        };
        let metrics = make_metrics(30, "500000", 5_000);
        assert_eq!(compute_score(&metrics, &config), 50);
    }
}
