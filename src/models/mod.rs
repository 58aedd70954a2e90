//! Domain record types staged by the cache
//!
//! Thin boundary types for the scenario and run records the orchestration
//! layer produces. The cache only needs them to be cloneable and
//! serializable; everything else about their lifecycle belongs upstream.

mod run;
mod scenario;

pub use run::{Run, RunStatus};
pub use scenario::{Scenario, ScenarioStatus};
