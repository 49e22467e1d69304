//! Scripted answer source for driving the engine without a terminal.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;

use crate::traits::AnswerSource;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Scripted {
    /// A line available immediately.
    Line(String),
    /// Nothing typed for one prompt.
    Silence,
    /// A line that becomes available after a delay.
    Delayed(Duration, String),
}

/// An [`AnswerSource`] that replays a fixed script.
///
/// Delays and silences sleep on the tokio clock, so tests using
/// `start_paused = true` run instantly. A delayed line that misses its
/// deadline stays queued with the remaining delay, the same way a late
/// keystroke would be picked up by the next prompt.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    script: VecDeque<Scripted>,
    served: usize,
}

impl ScriptedAnswers {
    /// Script of lines that are all available immediately.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: lines.into_iter().map(|l| Scripted::Line(l.into())).collect(),
            served: 0,
        }
    }

    pub fn then(mut self, line: impl Into<String>) -> Self {
        self.script.push_back(Scripted::Line(line.into()));
        self
    }

    /// Let the next timed prompt expire with no input.
    pub fn then_silence(mut self) -> Self {
        self.script.push_back(Scripted::Silence);
        self
    }

    pub fn then_delayed(mut self, delay: Duration, line: impl Into<String>) -> Self {
        self.script.push_back(Scripted::Delayed(delay, line.into()));
        self
    }

    /// Entries not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Lines handed out so far.
    pub fn served(&self) -> usize {
        self.served
    }

    fn serve(&mut self, line: String) -> Option<String> {
        self.served += 1;
        Some(line)
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn next_answer(&mut self, timeout: Duration) -> anyhow::Result<Option<String>> {
        match self.script.pop_front() {
            None => Ok(None),
            Some(Scripted::Line(line)) => Ok(self.serve(line)),
            Some(Scripted::Silence) => {
                tokio::time::sleep(timeout).await;
                Ok(None)
            }
            Some(Scripted::Delayed(delay, line)) => {
                if delay <= timeout {
                    tokio::time::sleep(delay).await;
                    Ok(self.serve(line))
                } else {
                    tokio::time::sleep(timeout).await;
                    self.script
                        .push_front(Scripted::Delayed(delay - timeout, line));
                    Ok(None)
                }
            }
        }
    }

    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            match self.script.pop_front() {
                None => return Ok(None),
                Some(Scripted::Silence) => continue,
                Some(Scripted::Line(line)) => return Ok(self.serve(line)),
                Some(Scripted::Delayed(delay, line)) => {
                    tokio::time::sleep(delay).await;
                    return Ok(self.serve(line));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn lines_are_served_in_order() {
        let mut answers = ScriptedAnswers::new(["1", "2"]);
        let t = Duration::from_secs(1);
        assert_eq!(answers.next_answer(t).await.unwrap().as_deref(), Some("1"));
        assert_eq!(answers.next_line().await.unwrap().as_deref(), Some("2"));
        assert_eq!(answers.next_line().await.unwrap(), None);
        assert_eq!(answers.served(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn silence_waits_out_the_deadline() {
        let mut answers = ScriptedAnswers::default().then_silence().then("5");
        let start = tokio::time::Instant::now();
        assert_eq!(
            answers.next_answer(Duration::from_secs(4)).await.unwrap(),
            None
        );
        assert!(start.elapsed() >= Duration::from_secs(4));
        assert_eq!(answers.remaining(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn late_line_carries_over_to_next_prompt() {
        let mut answers =
            ScriptedAnswers::default().then_delayed(Duration::from_secs(5), "12");
        assert_eq!(
            answers.next_answer(Duration::from_secs(3)).await.unwrap(),
            None
        );
        assert_eq!(
            answers
                .next_answer(Duration::from_secs(3))
                .await
                .unwrap()
                .as_deref(),
            Some("12")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn next_line_skips_silence() {
        let mut answers = ScriptedAnswers::default().then_silence().then("y");
        assert_eq!(answers.next_line().await.unwrap().as_deref(), Some("y"));
    }
}
