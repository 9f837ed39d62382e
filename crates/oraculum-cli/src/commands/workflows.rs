//! `oraculum workflows [ID]` — the guided workflows.

use std::io::Write;

use oraculum_studio::{Workflow, workflow_by_id, workflows};

use crate::{Error, Result};

/// List the workflows, or print one in full when an id is given.
pub fn run(out: &mut impl Write, id: Option<&str>) -> Result<()> {
    match id {
        None => list(out),
        Some(id) => {
            let workflow = workflow_by_id(id).ok_or_else(|| Error::workflow_not_found(id))?;
            detail(out, workflow)
        }
    }
}

fn list(out: &mut impl Write) -> Result<()> {
    writeln!(out, "GUIDED WORKFLOWS")?;
    for workflow in workflows() {
        writeln!(out)?;
        writeln!(out, "  {}  ({})", workflow.title, workflow.id)?;
        writeln!(
            out,
            "    {} steps · {} · {}",
            workflow.steps.len(),
            workflow.estimated_time,
            workflow.principle
        )?;
        writeln!(out, "    {}", workflow.description)?;
    }
    Ok(())
}

fn detail(out: &mut impl Write, workflow: &Workflow) -> Result<()> {
    writeln!(out, "{}  {}", workflow.title.to_uppercase(), workflow.subtitle)?;
    writeln!(out, "{}", workflow.description)?;
    writeln!(out, "Estimated time: {}", workflow.estimated_time)?;
    for step in &workflow.steps {
        writeln!(out)?;
        writeln!(out, "STEP {} — {} ({})", step.number, step.title, step.duration)?;
        writeln!(out, "  {}", step.description)?;
        writeln!(out)?;
        for line in step.prompt.lines() {
            if line.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, "  {line}")?;
            }
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
