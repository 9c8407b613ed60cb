// file: src/utils/validation.rs
// description: input validation and text helpers
// reference: input validation patterns

use crate::error::{ClaimDeskError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ClaimDeskError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(ClaimDeskError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_port(port: u16) -> Result<()> {
        if port == 0 {
            return Err(ClaimDeskError::Validation("Port cannot be 0".to_string()));
        }
        Ok(())
    }

    pub fn is_blank(text: &str) -> bool {
        text.trim().is_empty()
    }

    pub fn has_extension(path: &Path, extension: &str) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension))
    }

    /// Cuts at `max_chars` characters and appends `...` when anything was dropped.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());

        let file = temp.path().join("policy.pdf");
        std::fs::write(&file, b"%PDF").unwrap();
        assert!(Validator::validate_directory(&file).is_err());
    }

    #[test]
    fn test_validate_port() {
        assert!(Validator::validate_port(5000).is_ok());
        assert!(Validator::validate_port(0).is_err());
    }

    #[test]
    fn test_is_blank() {
        assert!(Validator::is_blank(""));
        assert!(Validator::is_blank("  \t\n"));
        assert!(!Validator::is_blank(" surgery "));
    }

    #[test]
    fn test_has_extension() {
        assert!(Validator::has_extension(Path::new("plan.pdf"), "pdf"));
        assert!(Validator::has_extension(Path::new("PLAN.PDF"), "pdf"));
        assert!(!Validator::has_extension(Path::new("plan.txt"), "pdf"));
        assert!(!Validator::has_extension(Path::new("pdf"), "pdf"));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(Validator::truncate_text("exactly10!", 10), "exactly10!");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
        assert_eq!(Validator::truncate_text("héllo wörld", 5), "héllo...");
    }
}
