//! The authored, compiled-in content.
//!
//! Everything here is hand-written copy. The long texts live in raw string
//! constants at the bottom of each module so the record constructors stay
//! readable.

mod principles;
mod prompts;

use crate::principle::Principle;
use crate::prompt::PromptEntry;

/// The seven authored principles, in number order.
pub fn principles() -> Vec<Principle> {
    principles::all()
}

/// The authored prompt library.
pub fn prompts() -> Vec<PromptEntry> {
    prompts::all()
}
