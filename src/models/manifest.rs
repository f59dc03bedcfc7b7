use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contents of `modrinth.index.json`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModrinthIndex {
    #[serde(default)]
    pub format_version: Option<u32>,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub version_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub files: Vec<ManifestFile>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestFile {
    pub path: String,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub hashes: BTreeMap<String, String>,
    #[serde(default)]
    pub downloads: Vec<String>,
    #[serde(default)]
    pub env: Option<FileEnv>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FileEnv {
    pub client: String,
    pub server: String,
}
