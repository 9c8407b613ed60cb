// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod history;
pub mod loader;
pub mod models;
pub mod utils;
pub mod web;

pub use analyzer::{ClaimAnalyzer, DecisionEngine, KeywordDecisionEngine};
pub use config::{Config, HistoryConfig, PolicyConfig, ServerConfig};
pub use error::{ClaimDeskError, Result};
pub use history::HistoryStore;
pub use loader::{LoadStats, PolicyLibrary, PolicyScanner, load_policies};
pub use models::{AnalysisResult, Decision, HistoryEntry, PolicyDocument, PolicySet};
pub use utils::{HealthReport, HealthStatus, PageTemplate, Validator};
pub use web::{AppState, create_router, serve};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _store = HistoryStore::new(&config.history);
        let _template = PageTemplate::new();
    }
}
