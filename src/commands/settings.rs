use crate::config::{AppSettings, SettingsOverride};
use crate::models::error::PackError;
use tracing::info;

pub fn show() -> Result<(), PackError> {
    let settings = AppSettings::load()?;
    println!("config file:  {}", AppSettings::location()?);
    println!("release dir:  {}", settings.release_dir);
    println!("docs dir:     {}", settings.docs_dir);
    println!("repository:   {}", settings.repo.as_deref().unwrap_or("-"));
    println!("modpack:      {}", settings.modpack.as_deref().unwrap_or("(first found)"));
    println!("api base:     {}", settings.api_base);
    Ok(())
}

pub fn set(changes: SettingsOverride) -> Result<(), PackError> {
    let settings = AppSettings::load()?.apply(changes);
    settings.save()?;
    info!("Settings saved to {}", AppSettings::location()?);
    Ok(())
}
