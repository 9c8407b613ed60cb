// file: src/analyzer/engine.rs
// description: pluggable decision engines for claim analysis
// reference: configurable keyword rules

use crate::models::AnalysisResult;

pub const MOCK_JUSTIFICATION: &str = "Mocked analysis. Add real integration for production use.";

/// Produces a decision for a claim given the policy text it should be judged against.
pub trait DecisionEngine: Send + Sync {
    fn decide(&self, claim_description: &str, policy_text: &str) -> AnalysisResult;
}

/// Placeholder engine: approves a fixed amount whenever the claim mentions a keyword.
///
/// The policy text is accepted but not consulted.
#[derive(Debug, Clone)]
pub struct KeywordDecisionEngine {
    keyword: String,
    approved_amount: String,
}

impl KeywordDecisionEngine {
    pub fn new(keyword: &str, approved_amount: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            approved_amount: approved_amount.to_string(),
        }
    }
}

impl Default for KeywordDecisionEngine {
    fn default() -> Self {
        Self::new("surgery", "$5000")
    }
}

impl DecisionEngine for KeywordDecisionEngine {
    fn decide(&self, claim_description: &str, _policy_text: &str) -> AnalysisResult {
        if claim_description.to_lowercase().contains(&self.keyword) {
            AnalysisResult::approved(self.approved_amount.clone(), MOCK_JUSTIFICATION)
        } else {
            AnalysisResult::rejected(MOCK_JUSTIFICATION)
        }
    }
}
