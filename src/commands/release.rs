use crate::config::AppSettings;
use crate::core::pipeline;
use crate::core::publisher::GithubPublisher;
use crate::models::error::PackError;
use tracing::{info, instrument};

#[instrument(skip_all, fields(repo = ?settings.repo))]
pub fn release(settings: &AppSettings, token: Option<&str>) -> Result<(), PackError> {
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| PackError::MissingSetting("GitHub token (--token or GITHUB_TOKEN)".into()))?;
    let repo = settings
        .repo
        .as_deref()
        .ok_or_else(|| PackError::MissingSetting("repository (--repo or `config set --repo`)".into()))?;

    let outcome = pipeline::generate(&settings.release_dir, settings.modpack.as_deref())?;
    info!("Publishing {}", outcome.latest().file_name);

    let publisher = GithubPublisher::new(&settings.api_base, repo, token)?;
    let summary = pipeline::publish(&outcome, &settings.docs_dir, &publisher)?;

    if let Some(path) = &summary.changelog_path {
        println!("\nChangelog saved to: {path}");
    }
    println!("Successfully created release {}", summary.release.tag);
    println!("Release URL: {}", summary.release.html_url);
    Ok(())
}
