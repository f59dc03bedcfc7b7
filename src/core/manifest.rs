use crate::models::error::PackError;
use crate::models::manifest::ModrinthIndex;
use crate::models::paths::MANIFEST_ENTRY;
use camino::Utf8Path;
use std::fs::File;
use std::io::Read;
use tracing::debug;
use zip::result::ZipError;

pub struct ManifestReader;

impl ManifestReader {
    /// Reads `modrinth.index.json` out of an `.mrpack` archive.
    pub fn read(archive_path: &Utf8Path) -> Result<ModrinthIndex, PackError> {
        let file = File::open(archive_path)?;
        let mut archive = zip::ZipArchive::new(file)?;

        let mut entry = archive.by_name(MANIFEST_ENTRY).map_err(|e| match e {
            ZipError::FileNotFound => PackError::ManifestNotFound(archive_path.to_string()),
            other => other.into(),
        })?;

        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes)?;

        let index = Self::parse(&bytes)
            .map_err(|e| PackError::ManifestParse(format!("{archive_path}: {e}")))?;
        debug!("{archive_path}: {} manifest files", index.files.len());
        Ok(index)
    }

    /// Decodes manifest bytes as UTF-8 JSON.
    pub fn parse(bytes: &[u8]) -> Result<ModrinthIndex, PackError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| PackError::ManifestParse(format!("invalid UTF-8: {e}")))?;
        Ok(serde_json::from_str(text)?)
    }
}
