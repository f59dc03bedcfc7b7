use crate::models::error::PackError;
use camino::Utf8PathBuf;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
const GITHUB_JSON: &str = "application/vnd.github+json";
const ASSET_CONTENT_TYPE: &str = "application/zip";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReleaseRequest {
    /// Modpack version without the `v` prefix, e.g. `1.4.0`.
    pub version: String,
    pub changelog: String,
    pub asset: Utf8PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishedRelease {
    pub tag: String,
    pub html_url: String,
}

pub trait ReleasePublisher {
    fn publish(&self, request: &ReleaseRequest) -> Result<PublishedRelease, PackError>;
}

#[derive(Serialize)]
struct CreateRelease<'a> {
    tag_name: &'a str,
    name: String,
    body: &'a str,
    draft: bool,
    prerelease: bool,
}

#[derive(Deserialize)]
struct ReleaseResponse {
    html_url: String,
    upload_url: String,
}

/// Publishes through the GitHub REST API: create the release, then upload the archive.
pub struct GithubPublisher {
    client: Client,
    api_base: String,
    repo: String,
    token: String,
}

impl GithubPublisher {
    pub fn new(api_base: &str, repo: &str, token: &str) -> Result<Self, PackError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
            token: token.to_string(),
        })
    }

    fn create_release(&self, tag: &str, request: &ReleaseRequest) -> Result<ReleaseResponse, PackError> {
        let body = CreateRelease {
            tag_name: tag,
            name: format!("Version {}", request.version),
            body: &request.changelog,
            draft: false,
            prerelease: false,
        };

        let response = self
            .client
            .post(format!("{}/repos/{}/releases", self.api_base, self.repo))
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_JSON)
            .json(&body)
            .send()?;

        Ok(Self::ensure_success(response, "create release")?.json()?)
    }

    fn upload_asset(&self, upload_url: &str, request: &ReleaseRequest) -> Result<(), PackError> {
        let name = request
            .asset
            .file_name()
            .ok_or_else(|| PackError::Publish(format!("asset has no file name: {}", request.asset)))?;
        let bytes = std::fs::read(&request.asset)?;
        debug!("uploading {name} ({} bytes)", bytes.len());

        let response = self
            .client
            .post(upload_endpoint(upload_url))
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_JSON)
            .header(CONTENT_TYPE, ASSET_CONTENT_TYPE)
            .query(&[("name", name), ("label", name)])
            .body(bytes)
            .send()?;

        Self::ensure_success(response, "upload asset").map(|_| ())
    }

    fn ensure_success(response: Response, action: &str) -> Result<Response, PackError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response.text().unwrap_or_default();
        Err(PackError::Publish(format!("{action} failed with {status}: {detail}")))
    }
}

impl ReleasePublisher for GithubPublisher {
    fn publish(&self, request: &ReleaseRequest) -> Result<PublishedRelease, PackError> {
        let tag = format!("v{}", request.version);
        let release = self.create_release(&tag, request)?;
        self.upload_asset(&release.upload_url, request)?;

        info!("Created release {tag} in {}", self.repo);
        Ok(PublishedRelease {
            tag,
            html_url: release.html_url,
        })
    }
}

/// GitHub returns the upload URL as a URI template (`.../assets{?name,label}`).
pub fn upload_endpoint(template: &str) -> &str {
    template
        .split_once('{')
        .map(|(url, _)| url)
        .unwrap_or(template)
}
