// file: src/models/analysis.rs
// description: claim decision and analysis result model
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::fmt;

pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approved => "Approved",
            Decision::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub decision: Decision,
    pub amount: String,
    pub justification: String,
}

impl AnalysisResult {
    pub fn approved(amount: impl Into<String>, justification: impl Into<String>) -> Self {
        Self {
            decision: Decision::Approved,
            amount: amount.into(),
            justification: justification.into(),
        }
    }

    /// Rejections never carry a payout amount.
    pub fn rejected(justification: impl Into<String>) -> Self {
        Self {
            decision: Decision::Rejected,
            amount: NOT_APPLICABLE.to_string(),
            justification: justification.into(),
        }
    }
}
