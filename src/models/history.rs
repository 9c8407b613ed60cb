// file: src/models/history.rs
// description: history entry model recorded for each analysed claim
// reference: internal data structures

use crate::models::{AnalysisResult, Decision};
use crate::utils::Validator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: String,
    pub claim_description: String,
    pub full_claim_description: String,
    pub selected_policy: String,
    pub decision: Decision,
    pub amount: String,
    pub justification: String,
    pub full_justification: String,
}

/// Preview lengths applied to the abbreviated fields of an entry.
#[derive(Debug, Clone, Copy)]
pub struct PreviewLimits {
    pub claim_chars: usize,
    pub justification_chars: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            claim_chars: 100,
            justification_chars: 200,
        }
    }
}

impl HistoryEntry {
    pub fn new(
        id: u64,
        timestamp: String,
        claim_description: &str,
        selected_policy: &str,
        result: &AnalysisResult,
        limits: PreviewLimits,
    ) -> Self {
        Self {
            id,
            timestamp,
            claim_description: Validator::truncate_text(claim_description, limits.claim_chars),
            full_claim_description: claim_description.to_string(),
            selected_policy: selected_policy.to_string(),
            decision: result.decision,
            amount: result.amount.clone(),
            justification: Validator::truncate_text(
                &result.justification,
                limits.justification_chars,
            ),
            full_justification: result.justification.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_fields_are_previewed() {
        let claim = "x".repeat(150);
        let result = AnalysisResult::rejected("y".repeat(250));
        let entry = HistoryEntry::new(
            1,
            "2024-01-01 00:00:00".to_string(),
            &claim,
            "all",
            &result,
            PreviewLimits::default(),
        );

        assert_eq!(entry.claim_description, format!("{}...", "x".repeat(100)));
        assert_eq!(entry.full_claim_description, claim);
        assert_eq!(entry.justification, format!("{}...", "y".repeat(200)));
        assert_eq!(entry.full_justification.len(), 250);
    }

    #[test]
    fn test_short_fields_are_kept() {
        let result = AnalysisResult::approved("$5000", "ok");
        let entry = HistoryEntry::new(
            7,
            "2024-01-01 00:00:00".to_string(),
            "knee surgery",
            "Health Plan",
            &result,
            PreviewLimits::default(),
        );

        assert_eq!(entry.claim_description, "knee surgery");
        assert_eq!(entry.justification, "ok");
        assert_eq!(entry.decision, Decision::Approved);
        assert_eq!(entry.amount, "$5000");
    }
}
