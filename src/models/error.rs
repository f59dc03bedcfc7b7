use derive_more::Display;

#[derive(Debug, Display)]
pub enum PackError {
    #[display("No .mrpack files found in {_0}")]
    NotFound(String),
    #[display("Invalid archive file name {_0}")]
    FilenameParse(String),
    #[display("No valid versioned .mrpack files found in {_0}")]
    NoValidVersions(String),
    #[display("Modpack '{_0}' has no archives in the release directory")]
    ModpackNotFound(String),
    #[display("modrinth.index.json not found in {_0}")]
    ManifestNotFound(String),
    #[display("Failed to parse manifest: {_0}")]
    ManifestParse(String),
    #[display("Failed to publish release: {_0}")]
    Publish(String),
    #[display("HTTP error: {_0}")]
    Http(String),
    #[display("Missing setting: {_0}")]
    MissingSetting(String),
    #[display("Configuration error: {_0}")]
    Config(String),
    #[display("Archive error: {_0}")]
    Zip(String),
    #[display("IO error: {_0}")]
    IOError(String),
}

impl std::error::Error for PackError {}

impl From<std::io::Error> for PackError {
    fn from(e: std::io::Error) -> Self {
        PackError::IOError(e.to_string())
    }
}

impl From<zip::result::ZipError> for PackError {
    fn from(e: zip::result::ZipError) -> Self {
        PackError::Zip(e.to_string())
    }
}

impl From<serde_json::Error> for PackError {
    fn from(e: serde_json::Error) -> Self {
        PackError::ManifestParse(e.to_string())
    }
}

impl From<semver::Error> for PackError {
    fn from(e: semver::Error) -> Self {
        PackError::FilenameParse(e.to_string())
    }
}

impl From<reqwest::Error> for PackError {
    fn from(e: reqwest::Error) -> Self {
        PackError::Http(e.to_string())
    }
}

impl From<confy::ConfyError> for PackError {
    fn from(e: confy::ConfyError) -> Self {
        PackError::Config(e.to_string())
    }
}
