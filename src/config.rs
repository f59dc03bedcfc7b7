use crate::core::publisher::DEFAULT_API_BASE;
use crate::models::error::PackError;
use crate::models::paths::ReleasePathRules;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "modpack-changelog";

/// Stored defaults. Command-line flags take precedence; the API token is never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub version: u8,
    pub release_dir: Utf8PathBuf,
    pub docs_dir: Utf8PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modpack: Option<String>,
    pub api_base: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        let paths = ReleasePathRules::default();
        Self {
            version: 0,
            release_dir: paths.release,
            docs_dir: paths.docs,
            repo: None,
            modpack: None,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsOverride {
    pub release_dir: Option<Utf8PathBuf>,
    pub docs_dir: Option<Utf8PathBuf>,
    pub repo: Option<String>,
    pub modpack: Option<String>,
    pub api_base: Option<String>,
}

impl AppSettings {
    pub fn load() -> Result<AppSettings, PackError> {
        Ok(confy::load(APP_NAME, None)?)
    }

    pub fn save(&self) -> Result<(), PackError> {
        Ok(confy::store(APP_NAME, None, self)?)
    }

    pub fn location() -> Result<Utf8PathBuf, PackError> {
        let path = confy::get_configuration_file_path(APP_NAME, None)?;
        Utf8PathBuf::from_path_buf(path)
            .map_err(|p| PackError::Config(format!("Invalid UTF-8 path: {}", p.display())))
    }

    pub fn apply(mut self, o: SettingsOverride) -> Self {
        if let Some(dir) = o.release_dir {
            self.release_dir = dir;
        }
        if let Some(dir) = o.docs_dir {
            self.docs_dir = dir;
        }
        if let Some(base) = o.api_base {
            self.api_base = base;
        }
        self.repo = o.repo.or(self.repo);
        self.modpack = o.modpack.or(self.modpack);
        self
    }
}
