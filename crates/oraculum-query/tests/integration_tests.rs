//! Integration tests over the builtin catalog.
//!
//! Exercises lookup and filtering together, the way the serving surfaces
//! use them.

use oraculum_content::{Catalog, Category};
use oraculum_query::{
    CategoryFacet, LibraryFilter, PrincipleFacet, filter_prompts, principle_by_slug,
    principle_neighbors,
};

fn catalog() -> &'static Catalog {
    Catalog::builtin()
}

#[test]
fn test_slug_lookup_roundtrip_for_all_principles() {
    for principle in catalog().principles() {
        let found = principle_by_slug(catalog(), &principle.slug)
            .unwrap_or_else(|| panic!("slug {} must resolve", principle.slug));
        assert_eq!(found.slug, principle.slug);
    }
}

#[test]
fn test_unknown_slugs_resolve_to_none_without_panicking() {
    for bogus in ["", "unknown", "perceptual", "perceptual-asymmetry-2", "../etc"] {
        assert!(principle_by_slug(catalog(), bogus).is_none(), "input {bogus:?}");
        assert!(principle_neighbors(catalog(), bogus).is_none(), "input {bogus:?}");
    }
}

#[test]
fn test_navigation_chain_walks_the_whole_catalog() {
    // Follow next-links from the first principle; they must visit every
    // record in number order and stop at the last.
    let principles = catalog().principles();
    let mut slug = principles[0].slug.clone();
    let mut visited = vec![slug.clone()];

    while let Some(next) = principle_neighbors(catalog(), &slug)
        .and_then(|n| n.next)
    {
        slug = next.slug.clone();
        visited.push(slug.clone());
    }

    let expected: Vec<String> = principles.iter().map(|p| p.slug.clone()).collect();
    assert_eq!(visited, expected);
}

#[test]
fn test_first_and_last_are_boundary_cases() {
    let first = principle_neighbors(catalog(), "perceptual-asymmetry").unwrap();
    assert!(first.previous.is_none());
    assert_eq!(first.next.unwrap().slug, "irreplaceability");

    let last = principle_neighbors(catalog(), "constraint-inversion").unwrap();
    assert!(last.next.is_none());
    assert_eq!(last.previous.unwrap().number, 6);
}

#[test]
fn test_growth_query_scenario() {
    let filter = LibraryFilter {
        query: "growth".to_string(),
        ..Default::default()
    };
    let result = filter_prompts(catalog().prompts(), &filter);

    let titles: Vec<&str> = result.iter().map(|p| p.title.as_str()).collect();
    assert!(titles.contains(&"Three Ways Growth Calculator"));
    for entry in &result {
        assert!(
            entry.title.to_lowercase().contains("growth")
                || entry.template.to_lowercase().contains("growth")
        );
    }
}

#[test]
fn test_flagship_scenario_returns_exactly_the_flagship_subset() {
    let filter = LibraryFilter {
        flagship_only: true,
        ..Default::default()
    };
    let result = filter_prompts(catalog().prompts(), &filter);
    assert!(!result.is_empty());
    assert!(result.iter().all(|p| p.flagship));
    assert_eq!(
        result.len(),
        catalog().prompts().iter().filter(|p| p.flagship).count()
    );
}

#[test]
fn test_facets_and_query_compose_as_conjunction() {
    let filter = LibraryFilter {
        query: "question".to_string(),
        category: CategoryFacet::Only(Category::Thinking),
        principle: PrincipleFacet::Only("SUPER-SYNTHESIS".to_string()),
        flagship_only: false,
    };
    let result = filter_prompts(catalog().prompts(), &filter);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Super-Synthesis Question Generator");
}

#[test]
fn test_empty_query_returns_full_catalog_in_order() {
    let result = filter_prompts(catalog().prompts(), &LibraryFilter::default());
    let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
    let expected: Vec<u32> = catalog().prompts().iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_placeholder_sections_never_reach_consumers() {
    for principle in catalog().principles() {
        for section in [
            principle.narrative.as_deref(),
            principle.key_insight.as_deref(),
            principle.ai_rationale.as_deref(),
        ]
        .into_iter()
        .flatten()
        {
            assert!(!section.contains("Coming soon"), "slug {}", principle.slug);
        }
    }
}
