//! Rounds: an ordered operation/query sequence sharing one timeout.

use std::time::Duration;

use anyhow::Result;

use crate::operation::Operation;
use crate::query::{Query, QueryOutcome};
use crate::register::RegisterBank;
use crate::traits::{AnswerSource, DrillReporter};

/// One step of a round.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundItem {
    Operate(Operation),
    Ask(Query),
}

impl From<Operation> for RoundItem {
    fn from(operation: Operation) -> Self {
        RoundItem::Operate(operation)
    }
}

impl From<Query> for RoundItem {
    fn from(query: Query) -> Self {
        RoundItem::Ask(query)
    }
}

/// Terminal state of a round.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    Passed,
    /// Stopped at the query at `item` (index into the round's items).
    Failed { item: usize, verdict: QueryOutcome },
}

impl RoundOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, RoundOutcome::Passed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    items: Vec<RoundItem>,
    timeout_secs: u64,
}

impl Round {
    /// Build a round from any interleaving of operations and queries.
    pub fn new(items: Vec<RoundItem>, timeout_secs: u64) -> Self {
        Self {
            items,
            timeout_secs,
        }
    }

    pub fn items(&self) -> &[RoundItem] {
        &self.items
    }

    /// Per-query time limit in whole seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.items.iter().filter_map(|item| match item {
            RoundItem::Operate(op) => Some(op),
            RoundItem::Ask(_) => None,
        })
    }

    pub fn queries(&self) -> impl Iterator<Item = &Query> {
        self.items.iter().filter_map(|item| match item {
            RoundItem::Ask(q) => Some(q),
            RoundItem::Operate(_) => None,
        })
    }

    /// Execute the round against `bank`, stopping at the first missed query.
    ///
    /// `index` is only used for reporting.
    pub async fn run(
        &self,
        index: usize,
        bank: &mut RegisterBank,
        answers: &mut dyn AnswerSource,
        reporter: &dyn DrillReporter,
    ) -> Result<RoundOutcome> {
        reporter.on_round_start(index, self.timeout());

        for (position, item) in self.items.iter().enumerate() {
            match item {
                RoundItem::Operate(operation) => {
                    reporter.on_operation(operation);
                    bank.apply(operation);
                    tracing::debug!(round = index, op = %operation, "applied operation");
                }
                RoundItem::Ask(query) => {
                    reporter.on_query(query.register());
                    let verdict = query.ask(bank, answers, self.timeout()).await?;
                    reporter.on_verdict(query.register(), &verdict);
                    tracing::debug!(round = index, register = %query.register(), %verdict, "query resolved");
                    if !verdict.is_correct() {
                        return Ok(RoundOutcome::Failed {
                            item: position,
                            verdict,
                        });
                    }
                }
            }
        }

        Ok(RoundOutcome::Passed)
    }
}
