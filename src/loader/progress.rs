// file: src/loader/progress.rs
// description: progress reporting and statistics for policy loading
// reference: uses indicatif for progress bars and tracks load counts

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    pub discovered: usize,
    pub loaded: usize,
    pub failed: usize,
}

impl LoadStats {
    pub fn success_rate(&self) -> f64 {
        let total = self.loaded + self.failed;
        if total == 0 {
            return 0.0;
        }
        (self.loaded as f64 / total as f64) * 100.0
    }
}

pub struct LoadProgress {
    bar: ProgressBar,
    stats: LoadStats,
}

impl LoadProgress {
    pub fn new(total_files: usize, visible: bool) -> Self {
        let bar = if visible {
            create_progress_bar(total_files as u64)
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            stats: LoadStats {
                discovered: total_files,
                ..LoadStats::default()
            },
        }
    }

    pub fn start_file(&self, filename: &str) {
        self.bar.set_message(filename.to_string());
    }

    pub fn inc_loaded(&mut self) {
        self.stats.loaded += 1;
        self.bar.inc(1);
    }

    pub fn inc_failed(&mut self) {
        self.stats.failed += 1;
        self.bar.inc(1);
    }

    pub fn finish(self) -> LoadStats {
        self.bar.finish_and_clear();
        self.stats
    }
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_stats_success_rate() {
        let stats = LoadStats {
            discovered: 4,
            loaded: 3,
            failed: 1,
        };
        assert_eq!(stats.success_rate(), 75.0);
        assert_eq!(LoadStats::default().success_rate(), 0.0);
    }

    #[test]
    fn test_progress_counts() {
        let mut progress = LoadProgress::new(3, false);
        progress.start_file("a.pdf");
        progress.inc_loaded();
        progress.inc_loaded();
        progress.inc_failed();

        let stats = progress.finish();
        assert_eq!(stats.discovered, 3);
        assert_eq!(stats.loaded, 2);
        assert_eq!(stats.failed, 1);
    }
}
