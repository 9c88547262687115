//! Storage operations
//!
//! Writes a batch of config files beneath the output root. Every path in the
//! batch is validated before the first byte hits the disk.

use log::info;
use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::entry::ConfigFile;
use crate::storage::results::{BatchResult, WrittenFile};
use crate::storage::validation::resolve_within_root;

/// Permission bits for created directories and files.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o700;

/// Validates every target path, then writes each file in order.
///
/// A containment failure on any entry aborts the batch before anything is
/// written. An I/O failure stops the batch at that entry; earlier entries stay
/// on disk.
pub fn write_batch(root: &Path, files: &[ConfigFile]) -> Result<BatchResult, StorageError> {
    let targets = files
        .iter()
        .map(|file| resolve_within_root(root, &file.path).map(|target| (target, file)))
        .collect::<Result<Vec<(PathBuf, &ConfigFile)>, StorageError>>()?;

    let mut result = BatchResult::default();
    for (target, file) in targets {
        if let Some(parent) = target.parent() {
            create_directory(parent).map_err(|source| StorageError::CreateDirectory {
                path: target.clone(),
                source,
            })?;
        }

        write_file(&target, file.contents.as_bytes()).map_err(|source| {
            StorageError::WriteFile {
                path: target.clone(),
                source,
            }
        })?;

        info!("Wrote file {}", target.display());
        result.written.push(WrittenFile {
            file_path: target,
            bytes: file.contents.len(),
        });
    }

    Ok(result)
}

/// Create a directory and any missing parents
fn create_directory(path: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(OUTPUT_MODE);
    }
    builder.create(path)
}

/// Create or truncate a file and write its contents
fn write_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.flush()
}
