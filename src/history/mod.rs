// file: src/history/mod.rs
// description: analysis history module exports
// reference: internal module structure

pub mod store;

pub use store::HistoryStore;
