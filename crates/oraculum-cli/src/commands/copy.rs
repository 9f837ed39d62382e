//! `oraculum copy <slug>` — copy a principle's extraction prompt.

use std::io::Write;

use oraculum_content::Catalog;
use oraculum_query::principle_by_slug;

use crate::copy::{CopyIndicator, CopySink};
use crate::{Error, Result};

/// Send the extraction prompt of a principle through the copy sink.
///
/// The confirmation goes to `out`; the template itself goes to the sink. A
/// sink failure is not fatal — the command reports that nothing was copied
/// and exits cleanly so the user can retry.
pub async fn run(
    out: &mut impl Write,
    catalog: &Catalog,
    sink: &dyn CopySink,
    indicator: &CopyIndicator,
    slug: &str,
) -> Result<()> {
    let principle =
        principle_by_slug(catalog, slug).ok_or_else(|| Error::principle_not_found(slug))?;

    let prompt = &principle.extraction_prompt;
    if indicator.copy(sink, &prompt.template).await {
        writeln!(out, "Copied \"{}\".", prompt.title)?;
    } else {
        writeln!(out, "Could not copy \"{}\" — try again.", prompt.title)?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
