use crate::models::error::PackError;
use camino::Utf8Path;

pub struct FileUtils;

impl FileUtils {
    /// Writes UTF-8 text, creating missing parent directories. Overwrites an existing file.
    pub fn write_text(path: &Utf8Path, text: &str) -> Result<(), PackError> {
        if let Some(parent) = path.parent() {
            if !parent.as_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, text)?;
        Ok(())
    }
}
