use regex::Regex;

const RISK_MARKER: &str = "Risk:";
const RECOMMENDATION_MARKER: &str = "Recommendation:";

/// Adapter boundary between the agent's free-text output and the structured
/// result. The agent service is uncontrolled; when its output format drifts,
/// a new implementation of this trait isolates the change.
pub trait TextAnalysisParser: Send + Sync {
    /// Risk statements in order of appearance, duplicates preserved.
    /// Absent markers yield an empty sequence — that is a normal outcome,
    /// not a failure.
    fn extract_risks(&self, text: &str) -> Vec<String>;

    /// Recommendation statements, same rules as `extract_risks`.
    fn extract_recommendations(&self, text: &str) -> Vec<String>;
}

/// Parser for the marker convention the current prompt elicits: statements
/// introduced by a literal `Risk:` / `Recommendation:` token and running to
/// the next occurrence of the same marker or end of text.
pub struct MarkerParser {
    risk: Regex,
    recommendation: Regex,
}

impl MarkerParser {
    pub fn new() -> Self {
        Self::with_markers(RISK_MARKER, RECOMMENDATION_MARKER)
    }

    pub fn with_markers(risk_marker: &str, recommendation_marker: &str) -> Self {
        Self {
            risk: Regex::new(&regex::escape(risk_marker)).expect("literal marker pattern"),
            recommendation: Regex::new(&regex::escape(recommendation_marker))
                .expect("literal marker pattern"),
        }
    }

    fn extract(&self, marker: &Regex, text: &str) -> Vec<String> {
        let starts: Vec<usize> = marker.find_iter(text).map(|m| m.start()).collect();

        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(text.len());
                text[start..end].trim().to_string()
            })
            .collect()
    }
}

impl Default for MarkerParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalysisParser for MarkerParser {
    fn extract_risks(&self, text: &str) -> Vec<String> {
        self.extract(&self.risk, text)
    }

    fn extract_recommendations(&self, text: &str) -> Vec<String> {
        self.extract(&self.recommendation, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_risks_in_order() {
        let parser = MarkerParser::new();
        let risks = parser.extract_risks("Risk: A Risk: B");
        assert_eq!(risks, vec!["Risk: A", "Risk: B"]);
    }

    #[test]
    fn test_no_markers_is_empty_not_error() {
        let parser = MarkerParser::new();
        assert!(parser.extract_risks("perfectly safe token, nothing to report").is_empty());
        assert!(parser.extract_recommendations("").is_empty());
    }

    #[test]
    fn test_duplicates_preserved() {
        let parser = MarkerParser::new();
        let risks = parser.extract_risks("Risk: same Risk: same");
        assert_eq!(risks, vec!["Risk: same", "Risk: same"]);
    }

    #[test]
    fn test_risks_and_recommendations_interleaved() {
        let parser = MarkerParser::new();
        let text = "Risk: unlocked liquidity. Recommendation: lock it. Risk: owner holds 90%.";

        let risks = parser.extract_risks(text);
        assert_eq!(risks.len(), 2);
        assert!(risks[0].starts_with("Risk: unlocked liquidity"));
        // A risk segment runs to the next *risk* marker, so the
        // recommendation text stays inside the first segment.
        assert!(risks[0].contains("Recommendation: lock it"));
        assert_eq!(risks[1], "Risk: owner holds 90%.");

        let recs = parser.extract_recommendations(text);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].starts_with("Recommendation: lock it"));
    }

    #[test]
    fn test_statement_spans_newlines() {
        let parser = MarkerParser::new();
        let risks = parser.extract_risks("Risk: the owner\ncan mint freely\nRisk: no timelock");
        assert_eq!(
            risks,
            vec!["Risk: the owner\ncan mint freely", "Risk: no timelock"]
        );
    }

    #[test]
    fn test_surrounding_prose_ignored() {
        let parser = MarkerParser::new();
        let text = "Here is my analysis.\nRisk: single holder dominance\nOverall be careful.";
        let risks = parser.extract_risks(text);
        assert_eq!(risks, vec!["Risk: single holder dominance\nOverall be careful."]);
    }

    #[test]
    fn test_custom_markers() {
        let parser = MarkerParser::with_markers("HAZARD>", "ADVICE>");
        let risks = parser.extract_risks("HAZARD> one HAZARD> two");
        assert_eq!(risks, vec!["HAZARD> one", "HAZARD> two"]);
    }
}
