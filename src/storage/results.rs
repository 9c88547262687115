//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::path::PathBuf;

/// A single file persisted by a batch write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub file_path: PathBuf,
    pub bytes: usize,
}

/// Result of a batch write operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub written: Vec<WrittenFile>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}
