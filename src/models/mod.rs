pub mod analysis;
pub mod token;

pub use analysis::SafetyAnalysisResult;
pub use token::{LiquidityMetrics, OwnershipMetrics, TokenMetrics};
