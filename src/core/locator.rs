use crate::core::version::cmp_precedence;
use crate::models::archive::{ComparisonPair, Selection, VersionedArchive};
use crate::models::error::PackError;
use crate::models::paths::ARCHIVE_EXTENSION;
use camino::{Utf8Path, Utf8PathBuf};
use semver::Version;
use tracing::{debug, warn};
use walkdir::WalkDir;

pub struct ArchiveLocator;

impl ArchiveLocator {
    /// Picks the newest and second newest archive of one modpack in `dir`.
    ///
    /// Without `modpack`, the first modpack name in file-name order is used.
    /// A single archive yields [`Selection::Single`] rather than an error.
    pub fn select_comparison_pair(
        dir: &Utf8Path,
        modpack: Option<&str>,
    ) -> Result<Selection, PackError> {
        let files = Self::list_archives(dir)?;
        if files.is_empty() {
            return Err(PackError::NotFound(dir.to_string()));
        }

        let groups = Self::group_by_modpack(&files);
        if groups.is_empty() {
            return Err(PackError::NoValidVersions(dir.to_string()));
        }

        let mut archives = Self::pick_group(groups, modpack)?;
        // Stable: equal precedence keeps listing order.
        archives.sort_by(|a, b| cmp_precedence(&b.version, &a.version));

        let mut ranked = archives.into_iter();
        match (ranked.next(), ranked.next()) {
            (Some(new), Some(old)) => {
                debug!("comparing {} against {}", new.file_name, old.file_name);
                Ok(Selection::Pair(ComparisonPair { new, old }))
            }
            (Some(latest), None) => Ok(Selection::Single(latest)),
            _ => Err(PackError::NoValidVersions(dir.to_string())),
        }
    }

    /// `.mrpack` files directly inside `dir`, sorted by file name. Symlinked archives count.
    pub fn list_archives(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, PackError> {
        if !dir.is_dir() {
            return Err(PackError::NotFound(dir.to_string()));
        }

        Ok(WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry in {dir}: {err}");
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| Utf8PathBuf::from_path_buf(e.into_path()).ok())
            .filter(|p| p.extension() == Some(ARCHIVE_EXTENSION))
            .collect())
    }

    /// Splits `<modpack> <semver>.mrpack` at the last space.
    pub fn parse_file_name(path: &Utf8Path) -> Result<VersionedArchive, PackError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| PackError::FilenameParse(path.to_string()))?;
        let base = file_name
            .strip_suffix(ARCHIVE_EXTENSION)
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(file_name);

        let (name, version) = base
            .rsplit_once(' ')
            .filter(|(name, version)| !name.trim().is_empty() && !version.is_empty())
            .ok_or_else(|| {
                PackError::FilenameParse(format!(
                    "{file_name}: expected '<modpack> <version>.{ARCHIVE_EXTENSION}'"
                ))
            })?;

        let version = Version::parse(version)
            .map_err(|e| PackError::FilenameParse(format!("{file_name}: {e}")))?;

        Ok(VersionedArchive {
            modpack_name: name.trim().to_string(),
            version,
            file_name: file_name.to_string(),
            path: path.to_owned(),
        })
    }

    // Insertion-ordered: groups appear in the order their first archive was listed.
    fn group_by_modpack(files: &[Utf8PathBuf]) -> Vec<(String, Vec<VersionedArchive>)> {
        let mut groups: Vec<(String, Vec<VersionedArchive>)> = Vec::new();

        for path in files {
            let archive = match Self::parse_file_name(path) {
                Ok(archive) => archive,
                Err(e) => {
                    warn!("Skipping {path}: {e}");
                    continue;
                }
            };

            match groups.iter_mut().find(|(name, _)| *name == archive.modpack_name) {
                Some((_, archives)) => archives.push(archive),
                None => groups.push((archive.modpack_name.clone(), vec![archive])),
            }
        }

        groups
    }

    fn pick_group(
        groups: Vec<(String, Vec<VersionedArchive>)>,
        modpack: Option<&str>,
    ) -> Result<Vec<VersionedArchive>, PackError> {
        if let Some(wanted) = modpack {
            return groups
                .into_iter()
                .find(|(name, _)| name == wanted)
                .map(|(_, archives)| archives)
                .ok_or_else(|| PackError::ModpackNotFound(wanted.to_string()));
        }

        let mut groups = groups.into_iter();
        let (chosen, archives) = groups
            .next()
            .ok_or_else(|| PackError::NoValidVersions(String::new()))?;
        for (ignored, _) in groups {
            warn!("Several modpacks found, using '{chosen}' and ignoring '{ignored}'");
        }
        Ok(archives)
    }
}
