// file: src/loader/scanner.rs
// description: Directory listing and policy file discovery
// reference: https://docs.rs/walkdir

use crate::config::PolicyConfig;
use crate::error::{ClaimDeskError, Result};
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

pub struct PolicyScanner {
    config: PolicyConfig,
}

#[derive(Debug, Clone)]
pub struct ScannedPolicyFile {
    pub path: PathBuf,
    pub filename: String,
}

/// A directory entry that looked like a policy but could not be inspected.
#[derive(Debug, Clone)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct PolicyScan {
    pub files: Vec<ScannedPolicyFile>,
    pub failures: Vec<ScanFailure>,
}

impl PolicyScan {
    pub fn discovered(&self) -> usize {
        self.files.len() + self.failures.len()
    }
}

impl PolicyScanner {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Lists matching files directly inside `root`, sorted by file name.
    ///
    /// Unreadable policy entries (e.g. dangling symlinks) are reported as
    /// failures; an unreadable `root` is an error.
    pub fn scan_directory(&self, root: &Path) -> Result<PolicyScan> {
        info!("Scanning directory for policies: {}", root.display());
        Validator::validate_directory(root)?;

        let mut scan = PolicyScan::default();

        for result in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    let failed_path = err
                        .path()
                        .filter(|path| err.depth() > 0 && *path != root)
                        .map(Path::to_path_buf);
                    let Some(path) = failed_path else {
                        return Err(ClaimDeskError::Io(err.into()));
                    };

                    if Validator::has_extension(&path, &self.config.extension) {
                        error!("Cannot read policy file {}: {}", path.display(), err);
                        scan.failures.push(ScanFailure {
                            message: err.to_string(),
                            path,
                        });
                    } else {
                        warn!("Cannot read directory entry {}: {}", path.display(), err);
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if !Validator::has_extension(path, &self.config.extension) {
                debug!("Skipping non-policy file: {}", path.display());
                continue;
            }

            let filename = entry.file_name().to_string_lossy().to_string();

            scan.files.push(ScannedPolicyFile {
                path: path.to_path_buf(),
                filename,
            });
        }

        info!(
            "Found {} policy files ({} unreadable)",
            scan.files.len(),
            scan.failures.len()
        );
        Ok(scan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pdf_config() -> PolicyConfig {
        PolicyConfig {
            directory: PathBuf::from("."),
            extension: "pdf".to_string(),
        }
    }

    #[test]
    fn test_scan_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b_plan.pdf"), b"%PDF-1.5").unwrap();
        fs::write(temp.path().join("a_plan.PDF"), b"%PDF-1.5").unwrap();
        fs::write(temp.path().join("notes.txt"), b"not a policy").unwrap();

        let scanner = PolicyScanner::new(pdf_config());
        let scan = scanner.scan_directory(temp.path()).unwrap();

        assert_eq!(scan.files.len(), 2);
        assert_eq!(scan.files[0].filename, "a_plan.PDF");
        assert_eq!(scan.files[1].filename, "b_plan.pdf");
        assert!(scan.failures.is_empty());
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("archive");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("old_plan.pdf"), b"%PDF-1.5").unwrap();
        fs::write(temp.path().join("current_plan.pdf"), b"%PDF-1.5").unwrap();

        let scanner = PolicyScanner::new(pdf_config());
        let scan = scanner.scan_directory(temp.path()).unwrap();

        assert_eq!(scan.files.len(), 1);
        assert_eq!(scan.files[0].filename, "current_plan.pdf");
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("health_plan.pdf"), b"%PDF-1.5").unwrap();
        std::os::unix::fs::symlink(
            temp.path().join("missing_target.pdf"),
            temp.path().join("ghost_plan.pdf"),
        )
        .unwrap();
        std::os::unix::fs::symlink(
            temp.path().join("missing_target.txt"),
            temp.path().join("ghost_notes.txt"),
        )
        .unwrap();

        let scanner = PolicyScanner::new(pdf_config());
        let scan = scanner.scan_directory(temp.path()).unwrap();

        assert_eq!(scan.files.len(), 1);
        assert_eq!(scan.failures.len(), 1);
        assert_eq!(scan.failures[0].path, temp.path().join("ghost_plan.pdf"));
        assert_eq!(scan.discovered(), 2);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let scanner = PolicyScanner::new(pdf_config());
        assert!(scanner.scan_directory(Path::new("/nonexistent/policies")).is_err());
    }
}
