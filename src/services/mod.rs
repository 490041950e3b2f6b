pub mod analyzer;

pub use analyzer::{AnalyzeError, TokenAnalyzer};
