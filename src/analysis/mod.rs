pub mod collector;
pub mod parser;
pub mod scorer;

pub use collector::{ChainMetricsCollector, ContractReadError, MetricsSource, TokenProfile};
pub use parser::{MarkerParser, TextAnalysisParser};
pub use scorer::{compute_score, ScoringConfig};
