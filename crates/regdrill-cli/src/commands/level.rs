//! The `regdrill level` command.

use std::path::PathBuf;

use anyhow::Result;

use regdrill_console::config::load_config_from;
use regdrill_console::FileLevelStore;
use regdrill_core::generator::{
    check_level, initial_timeout_secs, magnitude_bound, pairs_per_round, register_span,
};
use regdrill_core::register::RegisterId;
use regdrill_core::traits::LevelStore;

pub fn execute(
    set: Option<u32>,
    reset: bool,
    level_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let new_level = if reset { Some(0) } else { set };
    if let Some(level) = new_level {
        check_level(level)?;
    }

    let config = load_config_from(config_path.as_deref())?;
    let mut store = FileLevelStore::new(level_file.unwrap_or(config.level_file));

    if let Some(level) = new_level {
        store.save(level)?;
        println!("Level set to {level}");
    }

    let level = store.load()?;
    println!("Level: {level} ({})", store.path().display());
    println!("  {}", describe_level(level));
    Ok(())
}

/// One-line summary of what a level plays like.
pub(crate) fn describe_level(level: u32) -> String {
    let last = RegisterId::new(register_span(level) - 1)
        .map(|r| r.name())
        .unwrap_or('Z');
    format!(
        "registers A-{last}, constants below {}, {} steps per round, {}s for the first answer",
        magnitude_bound(level),
        pairs_per_round(level),
        initial_timeout_secs(level)
    )
}
