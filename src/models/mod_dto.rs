use serde::{Deserialize, Serialize};

/// Version recorded when no version can be read from a mod's file name.
pub const UNKNOWN_VERSION: &str = "unknown";

/// A jar under `mods/` in a modpack manifest.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModRecord {
    /// File name without directory and `.jar`, e.g. `sodium-fabric-0.5.8+mc1.20.1`.
    pub raw_name: String,
    pub path: String,
    pub version: String,
    pub file_size_bytes: u64,
    pub checksum_sha1: String,
}

impl ModRecord {
    pub fn has_known_version(&self) -> bool {
        self.version != UNKNOWN_VERSION
    }

    /// Changelog line for an added or removed mod.
    pub fn display_line(&self) -> String {
        if self.has_known_version() {
            format!("- {} ({})", self.raw_name, self.version)
        } else {
            format!("- {}", self.raw_name)
        }
    }
}

/// A mod present on both sides whose version changed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpdatedMod {
    pub identity: String,
    pub old_version: String,
    pub new_version: String,
}

impl UpdatedMod {
    pub fn display_line(&self) -> String {
        format!(
            "- {}: {} → {}",
            self.identity, self.old_version, self.new_version
        )
    }
}
