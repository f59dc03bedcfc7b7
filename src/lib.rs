pub mod commands;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use clap::Parser;
use commands::Cli;
use std::process::ExitCode;
use tracing::error;

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let _log_guard = utils::logging::init(cli.verbose);

    match commands::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
