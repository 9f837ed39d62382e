//! Slug resolution and positional navigation.
//!
//! Detail pages resolve a URL slug into its principle and compute
//! previous/next links. Because catalog construction guarantees that storage
//! order matches `number` order, neighbors are simply the records at ordinal
//! −1/+1.

use serde::Serialize;

use oraculum_content::{Catalog, Principle};
use oraculum_core::normalize_slug;

/// Previous/next navigation for a principle detail view.
///
/// The first record has no previous; the last has no next.
#[derive(Debug, Clone, Serialize)]
pub struct Neighbors<'a> {
    /// Principle at ordinal −1, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<&'a Principle>,
    /// Principle at ordinal +1, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'a Principle>,
}

/// Resolve a slug to its principle.
///
/// Input is normalized first, so URL segments and CLI arguments in display
/// case still resolve. Returns `None` for unknown slugs — never panics;
/// the caller renders a not-found view.
pub fn principle_by_slug<'a>(catalog: &'a Catalog, slug: &str) -> Option<&'a Principle> {
    let slug = normalize_slug(slug);
    catalog.principles().iter().find(|p| p.slug == slug)
}

/// Compute the previous/next principles around a slug.
///
/// Returns `None` when the slug itself is unknown.
pub fn principle_neighbors<'a>(catalog: &'a Catalog, slug: &str) -> Option<Neighbors<'a>> {
    let slug = normalize_slug(slug);
    let principles = catalog.principles();
    let index = principles.iter().position(|p| p.slug == slug)?;

    Some(Neighbors {
        previous: index.checked_sub(1).map(|i| &principles[i]),
        next: principles.get(index + 1),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::builtin()
    }

    #[test]
    fn test_every_builtin_slug_resolves_to_itself() {
        for principle in catalog().principles() {
            let found = principle_by_slug(catalog(), &principle.slug).unwrap();
            assert_eq!(found.slug, principle.slug);
            assert_eq!(found.number, principle.number);
        }
    }

    #[test]
    fn test_unknown_slug_is_none() {
        assert!(principle_by_slug(catalog(), "no-such-principle").is_none());
        assert!(principle_by_slug(catalog(), "").is_none());
    }

    #[test]
    fn test_lookup_normalizes_input() {
        let found = principle_by_slug(catalog(), "  Perceptual Asymmetry ").unwrap();
        assert_eq!(found.slug, "perceptual-asymmetry");
    }

    #[test]
    fn test_first_principle_has_no_previous() {
        let neighbors = principle_neighbors(catalog(), "perceptual-asymmetry").unwrap();
        assert!(neighbors.previous.is_none());
        assert_eq!(neighbors.next.unwrap().slug, "irreplaceability");
    }

    #[test]
    fn test_last_principle_has_no_next() {
        let neighbors = principle_neighbors(catalog(), "constraint-inversion").unwrap();
        assert!(neighbors.next.is_none());
        assert_eq!(neighbors.previous.unwrap().slug, "guaranteed-upside");
    }

    #[test]
    fn test_interior_neighbors_are_adjacent_ordinals() {
        let principles = catalog().principles();
        for principle in &principles[1..principles.len() - 1] {
            let neighbors = principle_neighbors(catalog(), &principle.slug).unwrap();
            assert_eq!(neighbors.previous.unwrap().number, principle.number - 1);
            assert_eq!(neighbors.next.unwrap().number, principle.number + 1);
        }
    }

    #[test]
    fn test_neighbors_of_unknown_slug_is_none() {
        assert!(principle_neighbors(catalog(), "no-such-principle").is_none());
    }

    #[test]
    fn test_neighbors_serialization_skips_missing_sides() {
        let neighbors = principle_neighbors(catalog(), "perceptual-asymmetry").unwrap();
        let json = serde_json::to_string(&neighbors).unwrap();
        assert!(!json.contains("previous"));
        assert!(json.contains("irreplaceability"));
    }
}
