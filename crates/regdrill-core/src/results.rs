//! Session results log and the persisted session report.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::trial::TrialOutcome;

/// Per-level trial outcomes, in the order the trials finished.
///
/// Each entry is the round index a trial failed at, or the round count if it
/// passed. Iteration is in ascending level order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionResults {
    by_level: BTreeMap<u32, Vec<usize>>,
}

impl SessionResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &TrialOutcome) {
        self.by_level
            .entry(outcome.level)
            .or_default()
            .push(outcome.rounds_reached);
    }

    pub fn get(&self, level: u32) -> &[usize] {
        self.by_level.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(level, outcomes)` pairs in ascending level order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[usize])> {
        self.by_level.iter().map(|(l, v)| (*l, v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.by_level.is_empty()
    }

    /// Total number of trials recorded.
    pub fn trial_count(&self) -> usize {
        self.by_level.values().map(Vec::len).sum()
    }
}

impl fmt::Display for SessionResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, outcomes) in self.iter() {
            writeln!(f, "LEVEL {level}: {outcomes:?}")?;
        }
        Ok(())
    }
}

/// A finished session, ready to be written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Level loaded from the store when the session began.
    pub start_level: u32,
    /// Level stored when the session ended.
    pub end_level: u32,
    pub results: SessionResults,
}

impl SessionReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        serde_json::from_str(&content).context("failed to parse report JSON")
    }
}
