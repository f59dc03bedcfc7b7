use crate::models::paths::ARCHIVE_EXTENSION;
use camino::Utf8PathBuf;
use semver::Version;

/// A release archive named `<modpack> <version>.mrpack`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionedArchive {
    pub modpack_name: String,
    pub version: Version,
    pub file_name: String,
    pub path: Utf8PathBuf,
}

impl VersionedArchive {
    /// File name without the archive extension, e.g. `My Pack 1.2.0`.
    pub fn stem(&self) -> &str {
        self.file_name
            .strip_suffix(ARCHIVE_EXTENSION)
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(&self.file_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonPair {
    pub new: VersionedArchive,
    pub old: VersionedArchive,
}

/// Result of scanning a release directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Pair(ComparisonPair),
    /// Only one archive of the modpack exists, nothing to compare against.
    Single(VersionedArchive),
}
