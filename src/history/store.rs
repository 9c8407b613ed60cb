// file: src/history/store.rs
// description: bounded in-memory history of analysed claims
// reference: shared async state behind tokio mutex

use crate::config::HistoryConfig;
use crate::models::{AnalysisResult, HistoryEntry, PreviewLimits};
use chrono::Local;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    next_id: u64,
}

impl HistoryLog {
    fn empty() -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
        }
    }
}

/// Keeps the most recent `capacity` entries in insertion order.
///
/// Ids come from a counter that only moves forward, so an id is never
/// handed out twice until the store is cleared.
#[derive(Clone)]
pub struct HistoryStore {
    log: Arc<Mutex<HistoryLog>>,
    capacity: usize,
    limits: PreviewLimits,
}

impl HistoryStore {
    pub fn new(config: &HistoryConfig) -> Self {
        Self {
            log: Arc::new(Mutex::new(HistoryLog::empty())),
            capacity: config.capacity.max(1),
            limits: PreviewLimits {
                claim_chars: config.claim_preview_chars,
                justification_chars: config.justification_preview_chars,
            },
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn append(
        &self,
        claim_description: &str,
        selected_policy: &str,
        result: &AnalysisResult,
    ) -> HistoryEntry {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let mut log = self.log.lock().await;

        let entry = HistoryEntry::new(
            log.next_id,
            timestamp,
            claim_description,
            selected_policy,
            result,
            self.limits,
        );
        log.next_id += 1;
        log.entries.push_back(entry.clone());

        while log.entries.len() > self.capacity {
            if let Some(evicted) = log.entries.pop_front() {
                debug!("Evicted history entry {}", evicted.id);
            }
        }

        entry
    }

    /// All entries, oldest first.
    pub async fn list(&self) -> Vec<HistoryEntry> {
        self.log.lock().await.entries.iter().cloned().collect()
    }

    /// Up to `limit` entries, newest first.
    pub async fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        self.log
            .lock()
            .await
            .entries
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    pub async fn get_by_id(&self, id: u64) -> Option<HistoryEntry> {
        self.log
            .lock()
            .await
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
    }

    pub async fn clear(&self) {
        let mut log = self.log.lock().await;
        *log = HistoryLog::empty();
    }

    pub async fn len(&self) -> usize {
        self.log.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.log.lock().await.entries.is_empty()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(&HistoryConfig::default())
    }
}
