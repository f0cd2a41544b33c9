//! # CLI Layer
//!
//! One possible client of the library. This is the only place that:
//! - parses process arguments (clap),
//! - reads stdin and writes stdout,
//! - sets up logging and decides the exit code.
//!
//! The interactive loop lives in [`session::Session`], generic over its input and
//! output so it can be driven from tests with in-memory buffers.

mod print;
mod session;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use flashcards::api::FlashcardsApi;
use flashcards::config::FlashcardsConfig;
use flashcards::error::Result;
use session::Session;
use setup::Cli;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

const HOME_ENV: &str = "FLASHCARDS_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match config_dir(&cli) {
        Some(dir) => {
            log::debug!("loading config from {}", dir.display());
            FlashcardsConfig::load(&dir)?
        }
        None => FlashcardsConfig::default(),
    };
    let config = config.merged(cli.import_from, cli.export_to, cli.seed);

    let color = !cli.no_color && io::stdout().is_terminal();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session =
        Session::new(FlashcardsApi::default(), stdin.lock(), stdout.lock(), &config)
            .with_color(color);
    session.run()
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Some(dir.clone());
    }
    if let Ok(home) = std::env::var(HOME_ENV) {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "flashcards", "flashcards").map(|d| d.config_dir().to_path_buf())
}
