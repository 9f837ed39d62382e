//! Read-only access to the content collections.
//!
//! A [`Catalog`] owns the full ordered sequences of principles and library
//! prompts. Construction validates the structural invariants once; after
//! that the data is immutable and can be read from any number of threads
//! without contention.

use std::sync::LazyLock;

use oraculum_core::util::slugs::is_normalized_slug;
use oraculum_core::{Error, Result};

use crate::builtin;
use crate::principle::Principle;
use crate::prompt::PromptEntry;

/// The authoritative, ordered content collections.
///
/// Invariants, checked by [`Catalog::new`]:
/// - principle `number` values are exactly `1..=N` in storage order, so
///   positional previous/next lookup is equivalent to ordinal −1/+1;
/// - principle slugs are pairwise distinct and in normalized kebab-case;
/// - prompt ids are pairwise distinct.
#[derive(Debug, Clone)]
pub struct Catalog {
    principles: Vec<Principle>,
    prompts: Vec<PromptEntry>,
}

impl Catalog {
    /// Create a catalog, validating the structural invariants.
    pub fn new(principles: Vec<Principle>, prompts: Vec<PromptEntry>) -> Result<Self> {
        for (index, principle) in principles.iter().enumerate() {
            let expected = index as u32 + 1;
            if principle.number != expected {
                return Err(Error::catalog(format!(
                    "principle '{}' has number {}, expected {} (numbers must be dense and in storage order)",
                    principle.slug, principle.number, expected
                )));
            }
            if !is_normalized_slug(&principle.slug) {
                return Err(Error::catalog(format!(
                    "principle slug '{}' is not normalized kebab-case",
                    principle.slug
                )));
            }
            if principles[..index].iter().any(|p| p.slug == principle.slug) {
                return Err(Error::catalog(format!(
                    "duplicate principle slug '{}'",
                    principle.slug
                )));
            }
        }

        for (index, prompt) in prompts.iter().enumerate() {
            if prompts[..index].iter().any(|p| p.id == prompt.id) {
                return Err(Error::catalog(format!("duplicate prompt id {}", prompt.id)));
            }
        }

        Ok(Self {
            principles,
            prompts,
        })
    }

    /// The builtin, compiled-in catalog.
    ///
    /// Constructed on first access. The builtin data is validated like any
    /// other; a violation is a defect in the authored constants and panics
    /// at first use rather than surfacing corrupt navigation later.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
            let catalog = Catalog::new(builtin::principles(), builtin::prompts())
                .expect("builtin catalog data violates catalog invariants");
            log::debug!(
                "builtin catalog loaded: {} principles, {} prompts",
                catalog.principles.len(),
                catalog.prompts.len()
            );
            catalog
        });
        &BUILTIN
    }

    /// Full ordered sequence of principles.
    pub fn principles(&self) -> &[Principle] {
        &self.principles
    }

    /// Full ordered sequence of library prompts.
    pub fn prompts(&self) -> &[PromptEntry] {
        &self.prompts
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principle::ExtractionPrompt;

    fn principle(slug: &str, number: u32) -> Principle {
        Principle {
            slug: slug.to_string(),
            number,
            title: slug.to_string(),
            subtitle: String::new(),
            quote: String::new(),
            core_principle: String::new(),
            narrative: None,
            key_insight: None,
            stories: Vec::new(),
            reflection_prompts: Vec::new(),
            ai_rationale: None,
            extraction_prompt: ExtractionPrompt {
                title: String::new(),
                description: String::new(),
                template: String::new(),
                flagship: false,
            },
        }
    }

    #[test]
    fn test_new_accepts_dense_ordered_numbers() {
        let catalog = Catalog::new(
            vec![principle("first", 1), principle("second", 2)],
            Vec::new(),
        )
        .unwrap();
        assert_eq!(catalog.principles().len(), 2);
    }

    #[test]
    fn test_new_rejects_gapped_numbers() {
        let err = Catalog::new(
            vec![principle("first", 1), principle("third", 3)],
            Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn test_new_rejects_out_of_order_numbers() {
        let err = Catalog::new(
            vec![principle("second", 2), principle("first", 1)],
            Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("expected 1"));
    }

    #[test]
    fn test_new_rejects_duplicate_slugs() {
        let err = Catalog::new(
            vec![principle("same", 1), principle("same", 2)],
            Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate principle slug"));
    }

    #[test]
    fn test_new_rejects_unnormalized_slugs() {
        let err = Catalog::new(vec![principle("Not A Slug", 1)], Vec::new()).unwrap_err();
        assert!(err.to_string().contains("not normalized"));
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.principles().len(), 7);
        assert_eq!(catalog.prompts().len(), 6);
    }

    #[test]
    fn test_builtin_catalog_numbers_are_dense() {
        for (index, principle) in Catalog::builtin().principles().iter().enumerate() {
            assert_eq!(principle.number, index as u32 + 1);
        }
    }
}
