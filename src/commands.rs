pub mod changelog;
pub mod release;
pub mod settings;

use crate::config::{AppSettings, SettingsOverride};
use crate::models::error::PackError;
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Changelog and release generator for Modrinth modpacks
#[derive(Parser, Debug)]
#[command(name = "modpack-changelog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare the two newest archives and write the changelog
    Diff(SourceArgs),

    /// Write the changelog, then publish the newest archive as a GitHub release
    Release(ReleaseArgs),

    /// Show or change stored settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory holding the `<modpack> <version>.mrpack` archives
    #[arg(long)]
    pub release_dir: Option<Utf8PathBuf>,

    /// Directory the changelog is written to
    #[arg(long)]
    pub docs_dir: Option<Utf8PathBuf>,

    /// Modpack to compare when the release directory holds several
    #[arg(long)]
    pub modpack: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ReleaseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// GitHub token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository as `owner/name`
    #[arg(long)]
    pub repo: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective settings and where they are stored
    Show,

    /// Store new default values
    Set {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long)]
        repo: Option<String>,

        /// GitHub API base URL
        #[arg(long)]
        api_base: Option<String>,
    },
}

impl SourceArgs {
    pub fn to_override(&self) -> SettingsOverride {
        SettingsOverride {
            release_dir: self.release_dir.clone(),
            docs_dir: self.docs_dir.clone(),
            modpack: self.modpack.clone(),
            ..Default::default()
        }
    }
}

pub fn execute(cli: Cli) -> Result<(), PackError> {
    match cli.command {
        Commands::Diff(source) => {
            let settings = AppSettings::load()?.apply(source.to_override());
            changelog::diff(&settings)
        }
        Commands::Release(args) => {
            let settings = AppSettings::load()?.apply(SettingsOverride {
                repo: args.repo.clone(),
                ..args.source.to_override()
            });
            release::release(&settings, args.token.as_deref())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => settings::show(),
            ConfigAction::Set {
                source,
                repo,
                api_base,
            } => settings::set(SettingsOverride {
                repo,
                api_base,
                ..source.to_override()
            }),
        },
    }
}
