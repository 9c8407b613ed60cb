// file: src/models/policy.rs
// description: policy document model built from extracted pdf text
// reference: internal data structures

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;

/// Loaded policies keyed by their derived display name.
pub type PolicySet = BTreeMap<String, PolicyDocument>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    pub name: String,
    pub filename: String,
    pub content: String,
    pub length: usize,
    pub page_count: usize,
    pub content_hash: String,
}

/// Lightweight listing row for the policies api.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySummary {
    pub name: String,
    pub filename: String,
    pub length: usize,
    pub page_count: usize,
}

impl PolicyDocument {
    /// `extension` is the policy file extension (without the dot) stripped from the name.
    pub fn new(filename: String, extension: &str, content: String, page_count: usize) -> Self {
        let name = Self::derive_name(&filename, extension);
        let length = content.chars().count();
        let content_hash = Self::compute_hash(&content);

        Self {
            name,
            filename,
            content,
            length,
            page_count,
            content_hash,
        }
    }

    /// Turns `health_plan.pdf` into `Health Plan`.
    pub fn derive_name(filename: &str, extension: &str) -> String {
        let stem = match Path::new(filename).extension() {
            Some(ext) if ext.eq_ignore_ascii_case(extension) => {
                &filename[..filename.len() - ext.len() - 1]
            }
            _ => filename,
        };

        title_case(&stem.replace('_', " "))
    }

    fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn summary(&self) -> PolicySummary {
        PolicySummary {
            name: self.name.clone(),
            filename: self.filename.clone(),
            length: self.length,
            page_count: self.page_count,
        }
    }
}

// A letter is uppercased when it starts a run of letters, lowercased otherwise.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}
