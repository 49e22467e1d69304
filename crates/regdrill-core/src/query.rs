//! Timed recall challenges.

use std::fmt;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::register::{RegisterBank, RegisterId};
use crate::traits::AnswerSource;

/// How a query resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// The answer matched the register exactly.
    Correct,
    /// A well-formed integer that did not match.
    Incorrect { answer: i64, expected: f64 },
    /// No answer arrived before the deadline, or input ended.
    TimedOut,
    /// The answer was not an integer. Counted as a wrong guess.
    Malformed { input: String },
}

impl QueryOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, QueryOutcome::Correct)
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Correct => write!(f, "correct"),
            QueryOutcome::Incorrect { answer, expected } => {
                write!(f, "incorrect: answered {answer}, value was {expected}")
            }
            QueryOutcome::TimedOut => write!(f, "timed out"),
            QueryOutcome::Malformed { input } => write!(f, "not a number: {input:?}"),
        }
    }
}

/// A request to recall one register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    register: RegisterId,
}

impl Query {
    pub fn new(register: RegisterId) -> Self {
        Self { register }
    }

    pub fn register(&self) -> RegisterId {
        self.register
    }

    /// Wait up to `timeout` for an answer and judge it against `bank`.
    pub async fn ask(
        &self,
        bank: &RegisterBank,
        answers: &mut dyn AnswerSource,
        timeout: Duration,
    ) -> Result<QueryOutcome> {
        let answer = answers.next_answer(timeout).await?;
        Ok(self.judge(bank, answer.as_deref()))
    }

    /// Compare a raw answer line with the register's current value.
    ///
    /// Comparison is exact: fractional register values can never be matched
    /// by an integer answer.
    pub fn judge(&self, bank: &RegisterBank, answer: Option<&str>) -> QueryOutcome {
        let Some(raw) = answer else {
            return QueryOutcome::TimedOut;
        };
        let trimmed = raw.trim();
        let Ok(answer) = trimmed.parse::<i64>() else {
            tracing::warn!(register = %self.register, input = trimmed, "answer is not an integer");
            return QueryOutcome::Malformed {
                input: trimmed.to_string(),
            };
        };

        let expected = bank.get(self.register);
        if matches_value(answer, expected) {
            QueryOutcome::Correct
        } else {
            QueryOutcome::Incorrect { answer, expected }
        }
    }
}

/// Integral register values are compared as `i64` so answers above 2^53 are
/// not rounded onto a neighbouring value.
fn matches_value(answer: i64, expected: f64) -> bool {
    if expected.fract() == 0.0 && expected >= i64::MIN as f64 && expected < i64::MAX as f64 {
        expected as i64 == answer
    } else {
        answer as f64 == expected
    }
}
