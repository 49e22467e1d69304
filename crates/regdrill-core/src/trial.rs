//! Trials: a batch of rounds at one difficulty level.

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DrillError;
use crate::generator::{initial_register_value, RoundGenerator, NON_ZERO_START_LEVEL};
use crate::register::RegisterBank;
use crate::round::Round;
use crate::traits::{AnswerSource, DrillReporter};

/// Result of running a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub level: u32,
    /// Index of the failed round, or the round count if every round passed.
    pub rounds_reached: usize,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    level: u32,
    rounds: Vec<Round>,
}

impl Trial {
    /// Generate a trial at `level` with five rounds of tightening timeouts.
    ///
    /// Fails with [`DrillError::LevelTooHigh`] above the maximum level.
    pub fn generate<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Result<Self, DrillError> {
        let rounds = RoundGenerator::new(level)?.rounds(rng);
        tracing::debug!(
            level,
            rounds = rounds.len(),
            steps = rounds.first().map(|r| r.items().len()).unwrap_or(0),
            "generated trial"
        );
        Ok(Self { level, rounds })
    }

    /// Build a trial from hand-made rounds.
    pub fn from_rounds(level: u32, rounds: Vec<Round>) -> Result<Self, DrillError> {
        if rounds.is_empty() {
            return Err(DrillError::EmptyTrial);
        }
        Ok(Self { level, rounds })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Run every round in order, resetting `bank` before each one.
    ///
    /// Stops at the first failed round.
    pub async fn run(
        &self,
        bank: &mut RegisterBank,
        answers: &mut dyn AnswerSource,
        reporter: &dyn DrillReporter,
    ) -> Result<TrialOutcome> {
        reporter.on_trial_start(self.level, self.rounds.len());
        let start_value = initial_register_value(self.level);

        for (index, round) in self.rounds.iter().enumerate() {
            bank.fill(start_value);
            if self.level >= NON_ZERO_START_LEVEL {
                reporter.on_registers_initialized(start_value);
            }

            let passed = round.run(index, bank, answers, reporter).await?.passed();
            reporter.on_round_complete(index, passed);

            if !passed {
                let outcome = TrialOutcome {
                    level: self.level,
                    rounds_reached: index,
                    passed: false,
                };
                tracing::info!(level = self.level, round = index, "trial failed");
                reporter.on_trial_complete(&outcome);
                return Ok(outcome);
            }
        }

        let outcome = TrialOutcome {
            level: self.level,
            rounds_reached: self.rounds.len(),
            passed: true,
        };
        tracing::info!(level = self.level, "trial passed");
        reporter.on_trial_complete(&outcome);
        Ok(outcome)
    }
}
