// file: src/loader/mod.rs
// description: policy document discovery, extraction and shared storage
// reference: internal module structure

pub mod library;
pub mod pdf;
pub mod progress;
pub mod scanner;

pub use library::{PolicyLibrary, load_policies};
pub use pdf::{ExtractedText, PdfTextExtractor};
pub use progress::{LoadProgress, LoadStats};
pub use scanner::{PolicyScan, PolicyScanner, ScanFailure, ScannedPolicyFile};
