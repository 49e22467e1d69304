//! Engine error types.

use thiserror::Error;

/// Errors raised by the session engine itself.
///
/// I/O failures from the answer source or level store travel as
/// `anyhow::Error`; these variants cover conditions the engine detects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrillError {
    /// A register index outside `0..26` was used.
    #[error("invalid register index {0} (expected 0..26)")]
    InvalidRegister(usize),

    /// A register name outside `A..=Z` was used.
    #[error("invalid register name '{0}'")]
    InvalidRegisterName(char),

    /// A level beyond the hardest playable one.
    #[error("level {0} is above the maximum level {max}", max = crate::generator::MAX_LEVEL)]
    LevelTooHigh(u32),

    /// A trial was built with no rounds.
    #[error("a trial needs at least one round")]
    EmptyTrial,
}
