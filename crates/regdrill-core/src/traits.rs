//! Seams between the session engine and the outside world.
//!
//! The engine never touches stdin, stdout, or the filesystem directly. Answers
//! arrive through an [`AnswerSource`], the difficulty level lives in a
//! [`LevelStore`], and everything the player should see goes to a
//! [`DrillReporter`].

use std::time::Duration;

use async_trait::async_trait;

use crate::operation::Operation;
use crate::query::QueryOutcome;
use crate::register::RegisterId;
use crate::results::SessionResults;
use crate::trial::TrialOutcome;

// ---------------------------------------------------------------------------
// Answer source
// ---------------------------------------------------------------------------

/// Line-oriented player input with a deadline on availability.
#[async_trait]
pub trait AnswerSource: Send {
    /// Wait up to `timeout` for one line of input.
    ///
    /// Returns `Ok(None)` when the deadline passes or input has ended.
    async fn next_answer(&mut self, timeout: Duration) -> anyhow::Result<Option<String>>;

    /// Wait for one line of input with no deadline. `Ok(None)` on end of input.
    async fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

// ---------------------------------------------------------------------------
// Level store
// ---------------------------------------------------------------------------

/// Persisted "next level to attempt".
pub trait LevelStore: Send {
    /// Read the stored level, initializing the store to 0 if it does not exist.
    fn load(&mut self) -> anyhow::Result<u32>;

    /// Overwrite the stored level.
    fn save(&mut self, level: u32) -> anyhow::Result<()>;
}

/// Level store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryLevelStore {
    level: Option<u32>,
    saves: u32,
}

impl MemoryLevelStore {
    pub fn new(level: u32) -> Self {
        Self {
            level: Some(level),
            saves: 0,
        }
    }

    /// Current level without initializing.
    pub fn level(&self) -> Option<u32> {
        self.level
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> u32 {
        self.saves
    }
}

impl LevelStore for MemoryLevelStore {
    fn load(&mut self) -> anyhow::Result<u32> {
        Ok(*self.level.get_or_insert(0))
    }

    fn save(&mut self, level: u32) -> anyhow::Result<()> {
        self.level = Some(level);
        self.saves += 1;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Reporter
// ---------------------------------------------------------------------------

/// Output channel for everything the player sees.
pub trait DrillReporter: Send + Sync {
    fn on_trial_start(&self, level: u32, round_count: usize);
    fn on_registers_initialized(&self, value: f64);
    fn on_round_start(&self, round: usize, timeout: Duration);
    fn on_operation(&self, operation: &Operation);
    fn on_query(&self, register: RegisterId);
    fn on_verdict(&self, register: RegisterId, outcome: &QueryOutcome);
    fn on_round_complete(&self, round: usize, passed: bool);
    fn on_trial_complete(&self, outcome: &TrialOutcome);
    fn on_continue_prompt(&self);
    fn on_session_complete(&self, results: &SessionResults);
}

/// No-op reporter.
pub struct NoopReporter;

impl DrillReporter for NoopReporter {
    fn on_trial_start(&self, _: u32, _: usize) {}
    fn on_registers_initialized(&self, _: f64) {}
    fn on_round_start(&self, _: usize, _: Duration) {}
    fn on_operation(&self, _: &Operation) {}
    fn on_query(&self, _: RegisterId) {}
    fn on_verdict(&self, _: RegisterId, _: &QueryOutcome) {}
    fn on_round_complete(&self, _: usize, _: bool) {}
    fn on_trial_complete(&self, _: &TrialOutcome) {}
    fn on_continue_prompt(&self) {}
    fn on_session_complete(&self, _: &SessionResults) {}
}
