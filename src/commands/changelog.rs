use crate::config::AppSettings;
use crate::core::pipeline::{self, ChangelogOutcome};
use crate::models::error::PackError;
use tracing::instrument;

#[instrument(skip_all, fields(release_dir = %settings.release_dir))]
pub fn diff(settings: &AppSettings) -> Result<(), PackError> {
    let outcome = pipeline::generate(&settings.release_dir, settings.modpack.as_deref())?;

    let report = match &outcome {
        ChangelogOutcome::Report(report) => report,
        ChangelogOutcome::NothingToCompare(latest) => {
            println!("{}: only {} found", pipeline::NOTHING_TO_COMPARE, latest.file_name);
            return Ok(());
        }
    };

    let path = pipeline::write_report(&settings.docs_dir, report)?;

    println!("\nChangelog has been generated and saved to: {path}");
    println!("\nChangelog contents:");
    println!("{}", "-".repeat(40));
    println!("{}", report.text);
    Ok(())
}
