//! Path validation
//!
//! Handles path containment checks for files written beneath the output root.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::StorageError;

/// Lexically normalizes a client supplied relative path.
///
/// Returns `None` when the path is empty, absolute, contains NUL, climbs above
/// the root with `..`, or normalizes to the root itself.
pub fn normalize_relative(relative: &str) -> Option<PathBuf> {
    if relative.is_empty() || relative.contains('\0') {
        return None;
    }

    let mut normalized = PathBuf::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if normalized.as_os_str().is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Resolves `relative` beneath `root`, refusing anything that could land outside it.
///
/// Besides the lexical check, every component that already exists under the root
/// is inspected and symbolic links are refused, so a link planted inside the
/// root cannot redirect the write elsewhere.
pub fn resolve_within_root(root: &Path, relative: &str) -> Result<PathBuf, StorageError> {
    let normalized =
        normalize_relative(relative).ok_or_else(|| StorageError::OutsideRoot(relative.to_string()))?;

    let mut current = root.to_path_buf();
    for component in normalized.components() {
        current.push(component);
        match fs::symlink_metadata(&current) {
            Ok(metadata) if metadata.file_type().is_symlink() => {
                return Err(StorageError::SymlinkInPath(relative.to_string()));
            }
            Ok(_) => {}
            // Nothing below a missing component can exist yet.
            Err(e) if e.kind() == ErrorKind::NotFound => break,
            Err(source) => {
                return Err(StorageError::InspectPath {
                    path: relative.to_string(),
                    source,
                });
            }
        }
    }

    Ok(root.join(normalized))
}
