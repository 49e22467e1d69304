//! The `regdrill preview` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use regdrill_core::generator::initial_register_value;
use regdrill_core::round::RoundItem;
use regdrill_core::trial::Trial;

use super::level::describe_level;

pub fn execute(level: u32, seed: Option<u64>) -> Result<()> {
    let mut rng = super::make_rng(seed);
    let trial = Trial::generate(level, &mut rng)?;

    println!("Level {level}: {}", describe_level(level));
    println!(
        "Registers start at {} each round.",
        initial_register_value(level)
    );
    println!("\n{}", render_trial(&trial));
    Ok(())
}

fn render_trial(trial: &Trial) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Round", "Timeout", "Steps"]);

    for (index, round) in trial.rounds().iter().enumerate() {
        let steps: Vec<String> = round
            .items()
            .iter()
            .map(|item| match item {
                RoundItem::Operate(op) => op.description().to_string(),
                RoundItem::Ask(q) => format!("  ? {}", q.register()),
            })
            .collect();
        table.add_row(vec![
            Cell::new(index),
            Cell::new(format!("{}s", round.timeout_secs())),
            Cell::new(steps.join("\n")),
        ]);
    }

    table
}
