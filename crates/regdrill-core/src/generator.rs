//! Difficulty-driven generation of rounds.
//!
//! Everything that scales with the level lives here: how many registers are in
//! play, how large constants get, how many steps a round has, and how much
//! time each answer gets.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::DrillError;
use crate::operation::Operation;
use crate::query::Query;
use crate::register::{RegisterId, REGISTER_COUNT};
use crate::round::{Round, RoundItem};

/// Rounds in every generated trial.
pub const ROUNDS_PER_TRIAL: usize = 5;

/// No round ever gives less than this many seconds per answer.
pub const MIN_TIMEOUT_SECS: u64 = 2;

/// Time limit of the first round at levels 0 through 9.
pub const BASE_TIMEOUT_SECS: u64 = 10;

/// From this level on, registers start at the level's value instead of zero.
pub const NON_ZERO_START_LEVEL: u32 = 10;

/// Hardest playable level. Rounds grow linearly with the level, so anything
/// beyond this is rejected rather than generated.
pub const MAX_LEVEL: u32 = 999;

/// Relative weights for AddConstant, AddRegisterInto, MultiplyRegisterBy,
/// SetConstant. Multiplication is kept rare so values stay recallable.
pub const OPERATION_WEIGHTS: [u32; 4] = [4, 1, 1, 4];

/// Accept `level` if it is playable.
pub fn check_level(level: u32) -> Result<u32, DrillError> {
    if level > MAX_LEVEL {
        Err(DrillError::LevelTooHigh(level))
    } else {
        Ok(level)
    }
}

/// Number of registers in play at `level`: `min(level + 1, 26)`.
pub fn register_span(level: u32) -> usize {
    (level as usize).saturating_add(1).min(REGISTER_COUNT)
}

/// Exclusive upper bound for generated constants: `10 + 10 * level`.
pub fn magnitude_bound(level: u32) -> u64 {
    10 + 10 * u64::from(level)
}

/// Operation/query pairs per round: `5 + level`.
pub fn pairs_per_round(level: u32) -> usize {
    5 + level as usize
}

/// Time limit of the first round: `10 - 2 * (level / 10)`, at least 2.
pub fn initial_timeout_secs(level: u32) -> u64 {
    let reduction = 2 * u64::from(level / 10);
    BASE_TIMEOUT_SECS
        .saturating_sub(reduction)
        .max(MIN_TIMEOUT_SECS)
}

/// Per-round time limits: one second less each round, floored at 2.
pub fn round_timeouts(level: u32) -> [u64; ROUNDS_PER_TRIAL] {
    let first = initial_timeout_secs(level);
    let mut timeouts = [0; ROUNDS_PER_TRIAL];
    for (i, timeout) in timeouts.iter_mut().enumerate() {
        *timeout = first.saturating_sub(i as u64).max(MIN_TIMEOUT_SECS);
    }
    timeouts
}

/// Value every register holds at the start of a round at `level`.
pub fn initial_register_value(level: u32) -> f64 {
    if level >= NON_ZERO_START_LEVEL {
        f64::from(level)
    } else {
        0.0
    }
}

/// Builds rounds for a fixed level.
pub struct RoundGenerator {
    level: u32,
    span: usize,
    magnitude: u64,
    weights: WeightedIndex<u32>,
}

impl RoundGenerator {
    /// Generator for `level`. Fails for levels above [`MAX_LEVEL`].
    pub fn new(level: u32) -> Result<Self, DrillError> {
        let level = check_level(level)?;
        Ok(Self {
            level,
            span: register_span(level),
            magnitude: magnitude_bound(level),
            // Static, non-empty, all-positive weights.
            weights: WeightedIndex::new(OPERATION_WEIGHTS).expect("valid operation weights"),
        })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Generate one round of `5 + level` operation/query pairs.
    pub fn round<R: Rng + ?Sized>(&self, timeout_secs: u64, rng: &mut R) -> Round {
        let pairs = pairs_per_round(self.level);
        let mut items = Vec::with_capacity(pairs * 2);
        for _ in 0..pairs {
            items.push(RoundItem::Operate(self.operation(rng)));
            items.push(RoundItem::Ask(Query::new(self.register(rng))));
        }
        Round::new(items, timeout_secs)
    }

    /// Generate all rounds of a trial, with tightening timeouts.
    pub fn rounds<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Round> {
        round_timeouts(self.level)
            .into_iter()
            .map(|timeout| self.round(timeout, rng))
            .collect()
    }

    fn operation<R: Rng + ?Sized>(&self, rng: &mut R) -> Operation {
        let source = self.register(rng);
        let target = self.register(rng);
        let amount = rng.gen_range(0..self.magnitude) as i64;
        match self.weights.sample(rng) {
            0 => Operation::add_constant(source, amount),
            1 => Operation::add_register_into(source, target),
            2 => Operation::multiply_register_by(source, target),
            _ => Operation::set_constant(source, amount),
        }
    }

    fn register<R: Rng + ?Sized>(&self, rng: &mut R) -> RegisterId {
        let index = rng.gen_range(0..self.span);
        // span never exceeds REGISTER_COUNT
        RegisterId::new(index).expect("register span within bank")
    }
}
