//! Run record
//!
//! A run is one execution of a scenario. Runs carry a `run_id` rather than
//! a generic `id`, which exercises the second step of the key precedence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Execution state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

/// A run record as produced by the orchestration layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Unique run identifier, the cache key for runs
    pub run_id: String,
    /// Scenario this run executes
    pub scenario_id: String,
    /// Current execution state
    pub status: RunStatus,
    /// 1-based attempt counter
    pub attempt: u32,
    /// When execution started
    pub started_at: DateTime<Utc>,
    /// When execution finished, if it has
    pub finished_at: Option<DateTime<Utc>>,
}

impl Run {
    /// Creates a pending first-attempt run timestamped now.
    pub fn new(run_id: impl Into<String>, scenario_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            scenario_id: scenario_id.into(),
            status: RunStatus::Pending,
            attempt: 1,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Marks the run finished with the given terminal status.
    pub fn finish(mut self, status: RunStatus) -> Self {
        self.status = status;
        self.finished_at = Some(Utc::now());
        self
    }
}
