//! Storage input types

use serde::Deserialize;

/// One file to write: a path relative to the output root and its contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub contents: String,
}
