pub mod assessor;
pub mod client;
pub mod prompt;

pub use assessor::{AgentAssessor, RiskAssessor};
pub use client::{AgentClient, AgentConfig, AgentError};
pub use prompt::build_analysis_prompt;
