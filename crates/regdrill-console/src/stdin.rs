//! Timeout-bounded line input.
//!
//! A dedicated OS thread does the blocking reads and forwards each line over
//! a channel; prompts then wait on the channel with a deadline. The reader
//! thread is never joined, so a pending read cannot hold up shutdown.

use std::io::BufRead;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::mpsc;

use regdrill_core::traits::AnswerSource;

/// Answers read line by line from a blocking reader, usually stdin.
pub struct LineAnswers {
    lines: mpsc::UnboundedReceiver<std::io::Result<String>>,
    closed: bool,
}

impl LineAnswers {
    /// Read answers from the process's standard input.
    pub fn stdin() -> Result<Self> {
        Self::from_reader(std::io::BufReader::new(std::io::stdin()))
    }

    /// Read answers from any buffered reader on a background thread.
    pub fn from_reader<R>(reader: R) -> Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::Builder::new()
            .name("regdrill-input".into())
            .spawn(move || {
                for line in reader.lines() {
                    let failed = line.is_err();
                    if tx.send(line).is_err() || failed {
                        break;
                    }
                }
            })
            .context("failed to spawn input thread")?;

        Ok(Self {
            lines: rx,
            closed: false,
        })
    }

    fn accept(&mut self, received: Option<std::io::Result<String>>) -> Result<Option<String>> {
        match received {
            Some(line) => Ok(Some(line.context("failed to read input")?)),
            None => {
                if !self.closed {
                    tracing::debug!("input closed");
                    self.closed = true;
                }
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl AnswerSource for LineAnswers {
    async fn next_answer(&mut self, timeout: Duration) -> Result<Option<String>> {
        match tokio::time::timeout(timeout, self.lines.recv()).await {
            Ok(received) => self.accept(received),
            Err(_) => Ok(None),
        }
    }

    async fn next_line(&mut self) -> Result<Option<String>> {
        let received = self.lines.recv().await;
        self.accept(received)
    }
}
