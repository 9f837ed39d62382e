//! `oraculum show <slug>` — one principle in full.
//!
//! Sections without written copy are skipped entirely, never rendered as
//! placeholders.

use std::io::Write;

use oraculum_content::{Catalog, Principle};
use oraculum_query::{principle_by_slug, principle_neighbors};

use crate::{Error, Result};

/// Print a principle detail view, or fail with a not-found error.
pub fn run(out: &mut impl Write, catalog: &Catalog, slug: &str) -> Result<()> {
    let principle =
        principle_by_slug(catalog, slug).ok_or_else(|| Error::principle_not_found(slug))?;

    render(out, principle)?;

    // Previous/next links; the slug resolved above, so neighbors exist.
    if let Some(neighbors) = principle_neighbors(catalog, slug) {
        writeln!(out)?;
        if let Some(previous) = neighbors.previous {
            writeln!(out, "  previous: {} ({})", previous.title, previous.slug)?;
        }
        if let Some(next) = neighbors.next {
            writeln!(out, "  next:     {} ({})", next.title, next.slug)?;
        }
    }
    Ok(())
}

fn render(out: &mut impl Write, principle: &Principle) -> Result<()> {
    writeln!(out, "PRINCIPLE {:02}  {}", principle.number, principle.subtitle)?;
    writeln!(out, "{}", principle.title)?;
    writeln!(out)?;
    writeln!(out, "  \"{}\"", principle.quote)?;
    writeln!(out)?;
    writeln!(out, "  {}", principle.core_principle)?;

    if let Some(narrative) = &principle.narrative {
        section(out, "WHAT JAY SEES", narrative)?;
    }
    if let Some(key_insight) = &principle.key_insight {
        section(out, "KEY INSIGHT", key_insight)?;
    }

    if !principle.stories.is_empty() {
        writeln!(out)?;
        writeln!(out, "== STORIES ==")?;
        for story in &principle.stories {
            writeln!(out)?;
            writeln!(out, "  {} — {}", story.title, story.hook)?;
            indented(out, &story.narrative)?;
            writeln!(out)?;
            writeln!(out, "  Lesson: {}", story.lesson)?;
        }
    }

    if !principle.reflection_prompts.is_empty() {
        writeln!(out)?;
        writeln!(out, "== THREE CHECKS ==")?;
        for (index, check) in principle.reflection_prompts.iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "  {}. {}", index + 1, check.area)?;
            writeln!(out, "     {}", check.question)?;
        }
    }

    if let Some(ai_rationale) = &principle.ai_rationale {
        section(out, "HOW AI FITS IN", ai_rationale)?;
    }

    writeln!(out)?;
    writeln!(out, "== EXTRACTION PROMPT ==")?;
    writeln!(out)?;
    let prompt = &principle.extraction_prompt;
    if prompt.flagship {
        writeln!(out, "  {} [GENIUS EXTRACTION]", prompt.title)?;
    } else {
        writeln!(out, "  {}", prompt.title)?;
    }
    writeln!(out, "  {}", prompt.description)?;
    writeln!(out)?;
    writeln!(out, "  Copy it with: oraculum copy {}", principle.slug)?;
    Ok(())
}

fn section(out: &mut impl Write, heading: &str, body: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "== {heading} ==")?;
    writeln!(out)?;
    indented(out, body)?;
    Ok(())
}

fn indented(out: &mut impl Write, body: &str) -> Result<()> {
    for line in body.lines() {
        if line.is_empty() {
            writeln!(out)?;
        } else {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
