//! The `regdrill play` command.

use std::path::PathBuf;

use anyhow::Result;

use regdrill_console::config::load_config_from;
use regdrill_console::{FileLevelStore, LineAnswers};
use regdrill_core::session::Session;

use crate::reporter::ConsoleReporter;

pub async fn execute(
    level_file: Option<PathBuf>,
    seed: Option<u64>,
    save_results: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let mut store = FileLevelStore::new(level_file.unwrap_or(config.level_file));
    let mut answers = LineAnswers::stdin()?;
    let mut rng = super::make_rng(seed.or(config.seed));
    let reporter = ConsoleReporter::new(config.confirm_prompt);

    tracing::debug!(level_file = %store.path().display(), "starting session");

    let report = Session::new()
        .run(&mut store, &mut answers, &reporter, &mut rng)
        .await?;

    if let Some(path) = save_results {
        report.save_json(&path)?;
        eprintln!("Results saved to: {}", path.display());
    }

    Ok(())
}
