//! Request body types for the config file endpoint.

use serde::Deserialize;

use crate::storage::ConfigFile;

/// Body of `POST /api/v1/config-files`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFilesPayload {
    #[serde(default)]
    pub files: Vec<ConfigFile>,
}

impl ConfigFilesPayload {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
