//! `oraculum list` — the seven principles at a glance.

use std::io::Write;

use oraculum_content::Catalog;

use crate::Result;

/// Print the principle index in number order.
pub fn run(out: &mut impl Write, catalog: &Catalog) -> Result<()> {
    writeln!(out, "THE SEVEN ORGANIZING PRINCIPLES")?;
    writeln!(out)?;
    for principle in catalog.principles() {
        writeln!(
            out,
            "  {}. {:<22} {}",
            principle.number, principle.title, principle.slug
        )?;
        writeln!(out, "     {}", principle.core_principle)?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
