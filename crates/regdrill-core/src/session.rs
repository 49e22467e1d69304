//! The session loop: trial after trial until the player stops.

use anyhow::Result;
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::generator::MAX_LEVEL;
use crate::register::RegisterBank;
use crate::results::{SessionReport, SessionResults};
use crate::traits::{AnswerSource, DrillReporter, LevelStore};
use crate::trial::{Trial, TrialOutcome};

/// Whether a continue-prompt reply means "keep going".
pub fn is_affirmative(reply: &str) -> bool {
    matches!(reply.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Level stored after passing a trial at `level`. Stays at [`MAX_LEVEL`]
/// once reached.
pub fn next_level(level: u32) -> u32 {
    level.saturating_add(1).min(MAX_LEVEL)
}

/// One player's run of trials.
///
/// Owns the register bank and the results log for as long as it lives.
#[derive(Debug, Default)]
pub struct Session {
    bank: RegisterBank,
    results: SessionResults,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &SessionResults {
        &self.results
    }

    pub fn bank(&self) -> &RegisterBank {
        &self.bank
    }

    /// Load the level, run one trial, advance the level on a pass, and log
    /// the outcome.
    pub async fn play_trial<R: Rng + ?Sized>(
        &mut self,
        store: &mut dyn LevelStore,
        answers: &mut dyn AnswerSource,
        reporter: &dyn DrillReporter,
        rng: &mut R,
    ) -> Result<TrialOutcome> {
        let level = store.load()?;
        let trial = Trial::generate(level, rng)?;
        let outcome = trial.run(&mut self.bank, answers, reporter).await?;

        if outcome.passed {
            let next = next_level(level);
            store.save(next)?;
            tracing::info!(from = level, to = next, "level advanced");
        }
        self.results.record(&outcome);
        Ok(outcome)
    }

    /// Play trials until the player declines to continue, then report the
    /// results log.
    pub async fn run<R: Rng + ?Sized>(
        mut self,
        store: &mut dyn LevelStore,
        answers: &mut dyn AnswerSource,
        reporter: &dyn DrillReporter,
        rng: &mut R,
    ) -> Result<SessionReport> {
        let id = Uuid::new_v4();
        let started_at = Utc::now();
        let start_level = store.load()?;
        tracing::info!(session = %id, level = start_level, "session started");

        loop {
            self.play_trial(store, answers, reporter, rng).await?;

            reporter.on_continue_prompt();
            match answers.next_line().await? {
                Some(reply) if is_affirmative(&reply) => continue,
                _ => break,
            }
        }

        reporter.on_session_complete(&self.results);
        let end_level = store.load()?;
        tracing::info!(
            session = %id,
            trials = self.results.trial_count(),
            level = end_level,
            "session ended"
        );

        Ok(SessionReport {
            id,
            started_at,
            finished_at: Utc::now(),
            start_level,
            end_level,
            results: self.results,
        })
    }
}
