//! regdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod reporter;

#[derive(Parser)]
#[command(
    name = "regdrill",
    version,
    about = "Register memory drills with escalating difficulty"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play trials until you choose to stop
    Play {
        /// File holding the next level to attempt
        #[arg(long)]
        level_file: Option<PathBuf>,

        /// RNG seed for reproducible trials
        #[arg(long)]
        seed: Option<u64>,

        /// Write the session report as JSON to this path
        #[arg(long)]
        save_results: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show or change the stored level
    Level {
        /// Overwrite the stored level
        #[arg(long, conflicts_with = "reset")]
        set: Option<u32>,

        /// Reset the stored level to 0
        #[arg(long)]
        reset: bool,

        /// File holding the next level to attempt
        #[arg(long)]
        level_file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a generated trial without playing it
    Preview {
        /// Difficulty level to generate
        #[arg(long, default_value = "0")]
        level: u32,

        /// RNG seed for reproducible trials
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Create a starter config
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("regdrill=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            level_file,
            seed,
            save_results,
            config,
        } => commands::play::execute(level_file, seed, save_results, config).await,
        Commands::Level {
            set,
            reset,
            level_file,
            config,
        } => commands::level::execute(set, reset, level_file, config),
        Commands::Preview { level, seed } => commands::preview::execute(level, seed),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
