use crate::core::changelog;
use crate::core::locator::ArchiveLocator;
use crate::core::manifest::ManifestReader;
use crate::core::mod_index::build_mod_index;
use crate::core::publisher::{PublishedRelease, ReleasePublisher, ReleaseRequest};
use crate::models::archive::{ComparisonPair, Selection, VersionedArchive};
use crate::models::changeset::ChangeSet;
use crate::models::error::PackError;
use crate::utils::file::FileUtils;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

pub const NOTHING_TO_COMPARE: &str = "Not enough versions to compare";

#[derive(Debug)]
pub struct ChangelogReport {
    pub pair: ComparisonPair,
    pub changes: ChangeSet,
    pub text: String,
}

#[derive(Debug)]
pub enum ChangelogOutcome {
    Report(ChangelogReport),
    /// Only one archive of the modpack exists.
    NothingToCompare(VersionedArchive),
}

impl ChangelogOutcome {
    pub fn latest(&self) -> &VersionedArchive {
        match self {
            ChangelogOutcome::Report(report) => &report.pair.new,
            ChangelogOutcome::NothingToCompare(latest) => latest,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ChangelogOutcome::Report(report) => &report.text,
            ChangelogOutcome::NothingToCompare(_) => NOTHING_TO_COMPARE,
        }
    }
}

#[derive(Debug)]
pub struct ReleaseSummary {
    pub changelog_path: Option<Utf8PathBuf>,
    pub release: PublishedRelease,
}

/// Selects the two newest archives in `release_dir` and renders their changelog.
pub fn generate(release_dir: &Utf8Path, modpack: Option<&str>) -> Result<ChangelogOutcome, PackError> {
    match ArchiveLocator::select_comparison_pair(release_dir, modpack)? {
        Selection::Single(latest) => {
            info!("Only {} found, nothing to compare", latest.file_name);
            Ok(ChangelogOutcome::NothingToCompare(latest))
        }
        Selection::Pair(pair) => {
            let changes = compare_archives(&pair)?;
            let text = changelog::render(&changes, pair.new.stem(), pair.old.stem());
            info!(
                added = changes.added.len(),
                removed = changes.removed.len(),
                updated = changes.updated.len(),
                "Compared {} with {}",
                pair.new.file_name,
                pair.old.file_name
            );
            Ok(ChangelogOutcome::Report(ChangelogReport { pair, changes, text }))
        }
    }
}

pub fn compare_archives(pair: &ComparisonPair) -> Result<ChangeSet, PackError> {
    let new_index = build_mod_index(&ManifestReader::read(&pair.new.path)?);
    let old_index = build_mod_index(&ManifestReader::read(&pair.old.path)?);
    Ok(changelog::compare(&old_index, &new_index))
}

/// `<docs>/changelog_<modpack> <version>.md`
pub fn changelog_path(docs_dir: &Utf8Path, archive: &VersionedArchive) -> Utf8PathBuf {
    docs_dir.join(format!("changelog_{}.md", archive.stem()))
}

pub fn write_report(docs_dir: &Utf8Path, report: &ChangelogReport) -> Result<Utf8PathBuf, PackError> {
    let path = changelog_path(docs_dir, &report.pair.new);
    FileUtils::write_text(&path, &report.text)?;
    info!("Changelog saved to {path}");
    Ok(path)
}

/// Writes the changelog (when there is one) and only then publishes, so a
/// failed publish leaves the changelog on disk.
pub fn publish(
    outcome: &ChangelogOutcome,
    docs_dir: &Utf8Path,
    publisher: &dyn ReleasePublisher,
) -> Result<ReleaseSummary, PackError> {
    let changelog_path = match outcome {
        ChangelogOutcome::Report(report) => Some(write_report(docs_dir, report)?),
        ChangelogOutcome::NothingToCompare(_) => None,
    };

    let latest = outcome.latest();
    let release = publisher.publish(&ReleaseRequest {
        version: latest.version.to_string(),
        changelog: outcome.text().to_string(),
        asset: latest.path.clone(),
    })?;

    Ok(ReleaseSummary {
        changelog_path,
        release,
    })
}
