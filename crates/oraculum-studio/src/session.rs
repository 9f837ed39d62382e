//! Step progression through a workflow.
//!
//! A [`WorkflowSession`] is plain local view state: which step is active and
//! which steps have been completed. Completing the last step finishes the
//! session without advancing past the end.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::workflow::Workflow;

/// Progression state for one workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowSession {
    step_count: usize,
    current: usize,
    completed: BTreeSet<usize>,
}

impl WorkflowSession {
    /// Start a session at the first step of a workflow.
    pub fn new(workflow: &Workflow) -> Self {
        Self {
            step_count: workflow.steps.len(),
            current: 0,
            completed: BTreeSet::new(),
        }
    }

    /// Zero-based index of the active step.
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// Number of steps in the workflow this session tracks.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns `true` if the given step has been completed.
    pub fn is_completed(&self, step: usize) -> bool {
        self.completed.contains(&step)
    }

    /// Returns `true` once every step has been completed.
    pub fn is_finished(&self) -> bool {
        self.completed.len() == self.step_count
    }

    /// Completed-step count, for progress display.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Mark the active step complete and advance to the next one.
    ///
    /// Completing the last step leaves the cursor on it; completing an
    /// already-completed step is a no-op apart from the advance.
    pub fn complete_current(&mut self) {
        self.completed.insert(self.current);
        if self.current + 1 < self.step_count {
            self.current += 1;
        }
    }

    /// Move the cursor to an arbitrary step (revisiting is allowed).
    ///
    /// Out-of-range indices are ignored.
    pub fn go_to(&mut self, step: usize) {
        if step < self.step_count {
            self.current = step;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
