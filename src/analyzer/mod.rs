// file: src/analyzer/mod.rs
// description: claim analysis against loaded policy documents
// reference: internal module structure

pub mod engine;

pub use engine::{DecisionEngine, KeywordDecisionEngine, MOCK_JUSTIFICATION};

use crate::models::{AnalysisResult, PolicySet};
use crate::utils::Validator;
use std::sync::Arc;
use tracing::debug;

pub const NO_POLICIES_JUSTIFICATION: &str = "No policy documents available.";
pub const NO_CLAIM_JUSTIFICATION: &str = "No claim description provided.";

#[derive(Clone)]
pub struct ClaimAnalyzer {
    engine: Arc<dyn DecisionEngine>,
}

impl ClaimAnalyzer {
    pub fn new(engine: Arc<dyn DecisionEngine>) -> Self {
        Self { engine }
    }

    /// Never fails: missing policies and blank claims become rejections.
    pub fn analyze(
        &self,
        policies: &PolicySet,
        claim_description: &str,
        selected_policy: Option<&str>,
    ) -> AnalysisResult {
        if policies.is_empty() {
            return AnalysisResult::rejected(NO_POLICIES_JUSTIFICATION);
        }

        if Validator::is_blank(claim_description) {
            return AnalysisResult::rejected(NO_CLAIM_JUSTIFICATION);
        }

        let policy_text = resolve_policy_text(policies, selected_policy);
        debug!("Analyzing claim against {} chars of policy text", policy_text.len());

        self.engine.decide(claim_description, &policy_text)
    }
}

impl Default for ClaimAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(KeywordDecisionEngine::default()))
    }
}

/// The selected policy's content, or every policy wrapped in banner lines.
pub fn resolve_policy_text(policies: &PolicySet, selected_policy: Option<&str>) -> String {
    if let Some(name) = selected_policy
        && let Some(policy) = policies.get(name)
    {
        return policy.content.clone();
    }

    combined_policy_text(policies)
}

pub fn combined_policy_text(policies: &PolicySet) -> String {
    let mut combined = String::new();

    for (name, policy) in policies {
        let upper = name.to_uppercase();
        combined.push_str(&format!("\n\n=== {} POLICY ===\n", upper));
        combined.push_str(&policy.content);
        combined.push_str(&format!("\n=== END OF {} POLICY ===\n", upper));
    }

    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Decision, PolicyDocument};
    use std::sync::Mutex;

    fn policies() -> PolicySet {
        let mut set = PolicySet::new();
        for (file, text) in [
            ("health_plan.pdf", "Surgery covered.\n"),
            ("auto_cover.pdf", "Collision covered.\n"),
        ] {
            let doc = PolicyDocument::new(file.to_string(), "pdf", text.to_string(), 1);
            set.insert(doc.name.clone(), doc);
        }
        set
    }

    #[derive(Default)]
    struct RecordingEngine {
        seen: Mutex<Vec<String>>,
    }

    impl DecisionEngine for RecordingEngine {
        fn decide(&self, _claim: &str, policy_text: &str) -> AnalysisResult {
            self.seen.lock().unwrap().push(policy_text.to_string());
            AnalysisResult::rejected("recorded")
        }
    }

    #[test]
    fn test_surgery_with_selected_policy_is_approved() {
        let result = ClaimAnalyzer::default().analyze(&policies(), "I need surgery", Some("Health Plan"));
        assert_eq!(result.decision, Decision::Approved);
        assert_eq!(result.amount, "$5000");
    }

    #[test]
    fn test_no_policies_rejects_everything() {
        let analyzer = ClaimAnalyzer::default();
        for claim in ["flu shot", "surgery", ""] {
            let result = analyzer.analyze(&PolicySet::new(), claim, None);
            assert_eq!(result.decision, Decision::Rejected);
            assert_eq!(result.amount, "N/A");
            assert_eq!(result.justification, NO_POLICIES_JUSTIFICATION);
        }
    }

    #[test]
    fn test_blank_claim_rejected() {
        let analyzer = ClaimAnalyzer::default();
        for claim in ["", "   ", "\n\t"] {
            let result = analyzer.analyze(&policies(), claim, None);
            assert_eq!(result.decision, Decision::Rejected);
            assert_eq!(result.justification, NO_CLAIM_JUSTIFICATION);
        }
    }

    #[test]
    fn test_other_claims_rejected() {
        let result = ClaimAnalyzer::default().analyze(&policies(), "broken windshield", None);
        assert_eq!(result.decision, Decision::Rejected);
        assert_eq!(result.amount, "N/A");
        assert_eq!(result.justification, MOCK_JUSTIFICATION);
    }

    #[test]
    fn test_engine_receives_resolved_text() {
        let engine = Arc::new(RecordingEngine::default());
        let analyzer = ClaimAnalyzer::new(engine.clone());
        let set = policies();

        analyzer.analyze(&set, "claim", Some("Auto Cover"));
        analyzer.analyze(&set, "claim", Some("Unknown Plan"));
        analyzer.analyze(&set, "claim", None);

        let seen = engine.seen.lock().unwrap();
        assert_eq!(seen[0], "Collision covered.\n");
        assert_eq!(seen[1], combined_policy_text(&set));
        assert_eq!(seen[2], seen[1]);
    }

    #[test]
    fn test_combined_text_delimiters() {
        let combined = combined_policy_text(&policies());
        let expected = "\n\n=== AUTO COVER POLICY ===\nCollision covered.\n\n=== END OF AUTO COVER POLICY ===\n\
                        \n\n=== HEALTH PLAN POLICY ===\nSurgery covered.\n\n=== END OF HEALTH PLAN POLICY ===\n";
        assert_eq!(combined, expected);
    }
}
