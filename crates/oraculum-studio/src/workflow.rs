//! Workflow content types and lookup.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use oraculum_core::normalize_slug;

use crate::builtin;

/// A guided, multi-step prompt program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    /// Stable identifier (lowercase kebab-case, unique).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display subtitle (uppercase tagline).
    pub subtitle: String,
    /// What the workflow produces for the reader.
    pub description: String,
    /// Principle(s) the workflow draws on, display form.
    pub principle: String,
    /// Rough total duration (e.g. "45 minutes").
    pub estimated_time: String,
    /// Ordered steps; never empty.
    pub steps: Vec<WorkflowStep>,
}

/// One step of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// 1-based position within the workflow.
    pub number: u32,
    /// Step title.
    pub title: String,
    /// What the step accomplishes.
    pub description: String,
    /// The prompt the user runs for this step.
    pub prompt: String,
    /// Rough duration (e.g. "15 min").
    pub duration: String,
}

/// All builtin workflows, in authored order.
pub fn workflows() -> &'static [Workflow] {
    static WORKFLOWS: LazyLock<Vec<Workflow>> = LazyLock::new(builtin::all);
    &WORKFLOWS
}

/// Resolve a workflow id, normalizing the input first.
///
/// Returns `None` for unknown ids; absence is expected and recoverable.
pub fn workflow_by_id(id: &str) -> Option<&'static Workflow> {
    let id = normalize_slug(id);
    workflows().iter().find(|w| w.id == id)
}

// ============================================================================
// Tests
// ============================================================================
