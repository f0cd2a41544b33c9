use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flashcards", bin_name = "flashcards", version)]
#[command(about = "Quiz yourself on term/definition cards", long_about = None)]
pub struct Cli {
    /// Card set to load before the first prompt
    #[arg(long, alias = "import", value_name = "FILE")]
    pub import_from: Option<PathBuf>,

    /// Card set to write after `exit`
    #[arg(long, alias = "export", value_name = "FILE")]
    pub export_to: Option<PathBuf>,

    /// Seed for picking quiz cards (reproducible sessions)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory holding config.json (defaults to $FLASHCARDS_HOME, then the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
