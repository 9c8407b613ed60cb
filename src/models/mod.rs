// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod analysis;
pub mod history;
pub mod policy;

pub use analysis::{AnalysisResult, Decision, NOT_APPLICABLE};
pub use history::{HistoryEntry, PreviewLimits};
pub use policy::{PolicyDocument, PolicySet, PolicySummary};
