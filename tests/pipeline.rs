mod common;

use camino::Utf8PathBuf;
use common::{setup_release_dir, write_mrpack};
use modpack_changelog_lib::core::pipeline::{self, ChangelogOutcome, NOTHING_TO_COMPARE};
use modpack_changelog_lib::core::publisher::{PublishedRelease, ReleasePublisher, ReleaseRequest};
use modpack_changelog_lib::models::error::PackError;
use std::cell::RefCell;

const OLD_MODS: &[&str] = &[
    "sodium-fabric-0.5.8+mc1.20.1",
    "lithium-fabric-mc1.20.1-0.11.2",
    "old-mod-1.0.0",
    "examplemod",
];

const NEW_MODS: &[&str] = &[
    "sodium-fabric-0.5.11+mc1.20.1",
    "lithium-fabric-mc1.20.1-0.11.2",
    "newmod-2.0.0",
    "examplemod",
];

/// Records requests; optionally checks the changelog file already exists when called.
struct RecordingPublisher {
    requests: RefCell<Vec<ReleaseRequest>>,
    expect_file: Option<Utf8PathBuf>,
    fail: bool,
}

impl RecordingPublisher {
    fn new(expect_file: Option<Utf8PathBuf>, fail: bool) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            expect_file,
            fail,
        }
    }
}

impl ReleasePublisher for RecordingPublisher {
    fn publish(&self, request: &ReleaseRequest) -> Result<PublishedRelease, PackError> {
        if let Some(path) = &self.expect_file {
            assert!(path.exists(), "changelog must be written before publishing");
        }
        self.requests.borrow_mut().push(request.clone());
        if self.fail {
            return Err(PackError::Publish("remote rejected the release".into()));
        }
        Ok(PublishedRelease {
            tag: format!("v{}", request.version),
            html_url: "https://example.test/releases/1".into(),
        })
    }
}

#[test]
fn test_generate_end_to_end() {
    let (_tmp, dir) = setup_release_dir();
    write_mrpack(&dir, "Pack 1.0.0.mrpack", OLD_MODS);
    write_mrpack(&dir, "Pack 1.1.0.mrpack", NEW_MODS);

    let outcome = pipeline::generate(&dir, None).unwrap();

    let report = match outcome {
        ChangelogOutcome::Report(report) => report,
        other => panic!("expected a report, got {other:?}"),
    };
    assert_eq!(report.pair.new.file_name, "Pack 1.1.0.mrpack");
    assert_eq!(
        report.text,
        "# Changelog: Pack 1.1.0 (compared to Pack 1.0.0)\n\
         \n\
         ## Added Mods (1)\n\
         - newmod-2.0.0 (2.0.0)\n\
         \n\
         ## Removed Mods (1)\n\
         - old-mod-1.0.0 (1.0.0)\n\
         \n\
         ## Updated Mods (1)\n\
         - sodium: 0.5.8 → 0.5.11"
    );
}

#[test]
fn test_entry_order_does_not_matter() {
    let (_tmp, dir) = setup_release_dir();
    write_mrpack(&dir, "Pack 1.0.0.mrpack", OLD_MODS);
    write_mrpack(&dir, "Pack 1.1.0.mrpack", NEW_MODS);
    let forward = pipeline::generate(&dir, None).unwrap();

    let (_tmp2, dir2) = setup_release_dir();
    let reversed_old: Vec<&str> = OLD_MODS.iter().rev().copied().collect();
    let reversed_new: Vec<&str> = NEW_MODS.iter().rev().copied().collect();
    write_mrpack(&dir2, "Pack 1.0.0.mrpack", &reversed_old);
    write_mrpack(&dir2, "Pack 1.1.0.mrpack", &reversed_new);
    let backward = pipeline::generate(&dir2, None).unwrap();

    match (forward, backward) {
        (ChangelogOutcome::Report(a), ChangelogOutcome::Report(b)) => {
            // Sizes and hashes depend on position in the manifest, so compare by name and version.
            let names = |r: &pipeline::ChangelogReport| {
                (
                    r.changes.added.iter().map(|m| (m.raw_name.clone(), m.version.clone())).collect::<Vec<_>>(),
                    r.changes.removed.iter().map(|m| (m.raw_name.clone(), m.version.clone())).collect::<Vec<_>>(),
                    r.changes.updated.clone(),
                )
            };
            assert_eq!(names(&a), names(&b));
            assert_eq!(a.text, b.text);
        }
        other => panic!("expected two reports, got {other:?}"),
    }
}

#[test]
fn test_identical_archives_give_header_only() {
    let (_tmp, dir) = setup_release_dir();
    write_mrpack(&dir, "Pack 1.0.0.mrpack", OLD_MODS);
    write_mrpack(&dir, "Pack 1.0.1.mrpack", OLD_MODS);

    let outcome = pipeline::generate(&dir, None).unwrap();
    assert_eq!(outcome.text(), "# Changelog: Pack 1.0.1 (compared to Pack 1.0.0)");
}

#[test]
fn test_single_archive_has_nothing_to_compare() {
    let (_tmp, dir) = setup_release_dir();
    write_mrpack(&dir, "Pack 1.0.0.mrpack", OLD_MODS);

    let outcome = pipeline::generate(&dir, None).unwrap();

    assert!(matches!(outcome, ChangelogOutcome::NothingToCompare(_)));
    assert_eq!(outcome.text(), NOTHING_TO_COMPARE);
    assert_eq!(outcome.latest().file_name, "Pack 1.0.0.mrpack");
}

#[test]
fn test_broken_manifest_is_fatal() {
    let (_tmp, dir) = setup_release_dir();
    write_mrpack(&dir, "Pack 1.0.0.mrpack", OLD_MODS);
    common::write_archive(&dir, "Pack 1.1.0.mrpack", &[("modrinth.index.json", "nope")]);

    let result = pipeline::generate(&dir, None);
    assert!(matches!(result, Err(PackError::ManifestParse(_))), "{result:?}");
}

#[test]
fn test_write_report_creates_docs_dir() {
    let (tmp, dir) = setup_release_dir();
    write_mrpack(&dir, "Pack 1.0.0.mrpack", OLD_MODS);
    write_mrpack(&dir, "Pack 1.1.0.mrpack", NEW_MODS);
    let docs = Utf8PathBuf::from_path_buf(tmp.path().join("docs")).unwrap();

    let outcome = pipeline::generate(&dir, None).unwrap();
    let ChangelogOutcome::Report(report) = &outcome else {
        panic!("expected a report");
    };
    let path = pipeline::write_report(&docs, report).unwrap();

    assert_eq!(path, docs.join("changelog_Pack 1.1.0.md"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), report.text);
}

#[test]
fn test_publish_writes_changelog_first() {
    let (tmp, dir) = setup_release_dir();
    write_mrpack(&dir, "Pack 1.0.0.mrpack", OLD_MODS);
    let asset = write_mrpack(&dir, "Pack 1.1.0.mrpack", NEW_MODS);
    let docs = Utf8PathBuf::from_path_buf(tmp.path().join("docs")).unwrap();
    let expected_file = docs.join("changelog_Pack 1.1.0.md");

    let outcome = pipeline::generate(&dir, None).unwrap();
    let publisher = RecordingPublisher::new(Some(expected_file.clone()), false);
    let summary = pipeline::publish(&outcome, &docs, &publisher).unwrap();

    assert_eq!(summary.changelog_path, Some(expected_file));
    assert_eq!(summary.release.tag, "v1.1.0");

    let requests = publisher.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].version, "1.1.0");
    assert_eq!(requests[0].asset, asset);
    assert_eq!(requests[0].changelog, outcome.text());
}

#[test]
fn test_failed_publish_keeps_changelog() {
    let (tmp, dir) = setup_release_dir();
    write_mrpack(&dir, "Pack 1.0.0.mrpack", OLD_MODS);
    write_mrpack(&dir, "Pack 1.1.0.mrpack", NEW_MODS);
    let docs = Utf8PathBuf::from_path_buf(tmp.path().join("docs")).unwrap();

    let outcome = pipeline::generate(&dir, None).unwrap();
    let publisher = RecordingPublisher::new(None, true);
    let result = pipeline::publish(&outcome, &docs, &publisher);

    assert!(matches!(result, Err(PackError::Publish(_))), "{result:?}");
    let written = std::fs::read_to_string(docs.join("changelog_Pack 1.1.0.md")).unwrap();
    assert_eq!(written, outcome.text());
}

#[test]
fn test_publish_single_archive_without_changelog_file() {
    let (tmp, dir) = setup_release_dir();
    let asset = write_mrpack(&dir, "Pack 1.0.0.mrpack", OLD_MODS);
    let docs = Utf8PathBuf::from_path_buf(tmp.path().join("docs")).unwrap();

    let outcome = pipeline::generate(&dir, None).unwrap();
    let publisher = RecordingPublisher::new(None, false);
    let summary = pipeline::publish(&outcome, &docs, &publisher).unwrap();

    assert!(summary.changelog_path.is_none());
    assert!(!docs.exists());
    let requests = publisher.requests.borrow();
    assert_eq!(requests[0].changelog, NOTHING_TO_COMPARE);
    assert_eq!(requests[0].asset, asset);
}
