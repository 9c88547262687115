//! File system storage management
//!
//! Handles path containment and writing config files under the output root.

pub mod entry;
pub mod operations;
pub mod results;
pub mod validation;

pub use entry::ConfigFile;
pub use operations::write_batch;
pub use results::{BatchResult, WrittenFile};
pub use validation::{normalize_relative, resolve_within_root};
