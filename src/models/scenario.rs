//! Scenario record
//!
//! A scenario is an orchestration blueprint: a named unit of work the
//! orchestrator creates, activates and eventually archives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    Draft,
    Active,
    Archived,
}

/// A scenario record as produced by the orchestration layer.
///
/// The `id` is the cache key (see [`cache::key`](crate::cache::key)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique scenario identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Current lifecycle state
    pub status: ScenarioStatus,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last mutation time
    pub updated_at: DateTime<Utc>,
}

impl Scenario {
    /// Creates a draft scenario timestamped now.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            status: ScenarioStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Transitions the scenario to a new status, bumping `updated_at`.
    pub fn with_status(mut self, status: ScenarioStatus) -> Self {
        self.status = status;
        self.updated_at = Utc::now();
        self
    }
}
