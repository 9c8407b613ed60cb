// file: src/loader/library.rs
// description: policy loading and the shared, reloadable policy map
// reference: partial-failure directory ingestion

use crate::config::PolicyConfig;
use crate::error::{ClaimDeskError, Result};
use crate::loader::pdf::PdfTextExtractor;
use crate::loader::progress::{LoadProgress, LoadStats};
use crate::loader::scanner::PolicyScanner;
use crate::models::{PolicyDocument, PolicySet, PolicySummary};
use crate::utils::OperationTimer;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Loads every policy file in the configured directory.
///
/// A file that cannot be read or parsed is logged and left out; only a
/// failure to list the directory itself is returned as an error. When two
/// files derive the same name the later one (in file-name order) wins.
pub fn load_policies(config: &PolicyConfig, show_progress: bool) -> Result<(PolicySet, LoadStats)> {
    let timer = OperationTimer::new("load policies");
    let scanner = PolicyScanner::new(config.clone());
    let scan = scanner.scan_directory(&config.directory)?;

    let mut progress = LoadProgress::new(scan.discovered(), show_progress);
    let mut policies = PolicySet::new();

    for failure in &scan.failures {
        progress.start_file(&failure.path.display().to_string());
        progress.inc_failed();
    }

    for file in scan.files {
        progress.start_file(&file.filename);

        match PdfTextExtractor::extract(&file.path) {
            Ok(extracted) => {
                let document = PolicyDocument::new(
                    file.filename.clone(),
                    &config.extension,
                    extracted.content,
                    extracted.page_count,
                );
                debug!(
                    "Loaded policy '{}' from {} ({} chars, {} pages)",
                    document.name, file.filename, document.length, document.page_count
                );

                if let Some(previous) = policies.insert(document.name.clone(), document) {
                    warn!(
                        "Policy name collision: {} replaces {}",
                        file.filename, previous.filename
                    );
                }
                progress.inc_loaded();
            }
            Err(e) => {
                let err = ClaimDeskError::PolicyLoad {
                    path: file.path.clone(),
                    message: e.to_string(),
                };
                error!("{}", err);
                progress.inc_failed();
            }
        }
    }

    let stats = progress.finish();
    timer.finish_with_count(policies.len());
    Ok((policies, stats))
}

/// Process-wide policy map. Reloads replace the whole map at once.
#[derive(Clone, Default)]
pub struct PolicyLibrary {
    policies: Arc<RwLock<PolicySet>>,
}

impl PolicyLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_policies(policies: PolicySet) -> Self {
        Self {
            policies: Arc::new(RwLock::new(policies)),
        }
    }

    /// Rescans `config.directory` off the async runtime, then swaps the map.
    pub async fn reload(&self, config: &PolicyConfig) -> Result<LoadStats> {
        let config = config.clone();
        let (policies, stats) =
            tokio::task::spawn_blocking(move || load_policies(&config, false))
                .await
                .map_err(|e| ClaimDeskError::Server(format!("Policy reload task failed: {}", e)))??;

        self.replace(policies).await;
        info!(
            "Policy library reloaded: {} loaded, {} failed",
            stats.loaded, stats.failed
        );
        Ok(stats)
    }

    pub async fn replace(&self, policies: PolicySet) {
        let mut guard = self.policies.write().await;
        *guard = policies;
    }

    pub async fn snapshot(&self) -> PolicySet {
        self.policies.read().await.clone()
    }

    pub async fn names(&self) -> Vec<String> {
        self.policies.read().await.keys().cloned().collect()
    }

    pub async fn summaries(&self) -> Vec<PolicySummary> {
        self.policies
            .read()
            .await
            .values()
            .map(PolicyDocument::summary)
            .collect()
    }

    pub async fn get(&self, name: &str) -> Option<PolicyDocument> {
        self.policies.read().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.policies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.policies.read().await.is_empty()
    }
}
