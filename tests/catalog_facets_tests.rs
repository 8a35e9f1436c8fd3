/// Facet derivation tests
///
/// Covers the de-duplicated tag/delivery-time sets used to populate
/// filter controls and the counted facets ordered by product count.
mod common;

use cake_catalog::fixtures::sample_catalog;
use cake_catalog::{category_facets, derive_facets, tag_facets, FacetCount};
use common::product;

#[test]
fn test_facets_are_deduplicated_in_first_occurrence_order() {
    let catalog = sample_catalog();
    let facets = derive_facets(&catalog);

    assert_eq!(
        facets.tags,
        vec!["chocolate", "classic", "eggless", "premium", "seasonal", "fruit"]
    );
    assert_eq!(facets.delivery_times, vec!["same-day", "next-day", "two-day"]);
}

#[test]
fn test_facets_of_empty_catalog() {
    let facets = derive_facets(&[]);
    assert!(facets.tags.is_empty());
    assert!(facets.delivery_times.is_empty());
}

#[test]
fn test_facets_ignore_duplicate_observations() {
    let mut a = product(1, "A", 100);
    a.tags = vec!["classic".to_string()];
    a.delivery_time = "same-day".to_string();
    let mut b = product(2, "B", 200);
    b.tags = vec!["classic".to_string()];
    b.delivery_time = "same-day".to_string();
    let catalog = vec![a, b];

    let facets = derive_facets(&catalog);
    assert_eq!(facets.tags, vec!["classic"]);
    assert_eq!(facets.delivery_times, vec!["same-day"]);
}

#[test]
fn test_category_facets_count_descending() {
    let catalog = sample_catalog();
    let facets = category_facets(&catalog);

    assert_eq!(
        facets,
        vec![
            FacetCount { value: "Birthday".to_string(), count: 4 },
            FacetCount { value: "Cheesecake".to_string(), count: 2 },
            // Singletons keep first-occurrence order
            FacetCount { value: "Anniversary".to_string(), count: 1 },
            FacetCount { value: "Custom".to_string(), count: 1 },
            FacetCount { value: "Cupcake".to_string(), count: 1 },
            FacetCount { value: "Wedding".to_string(), count: 1 },
        ]
    );
}

#[test]
fn test_tag_facets_count_descending() {
    let catalog = sample_catalog();
    let facets = tag_facets(&catalog);

    assert_eq!(
        facets,
        vec![
            FacetCount { value: "classic".to_string(), count: 5 },
            FacetCount { value: "premium".to_string(), count: 4 },
            FacetCount { value: "fruit".to_string(), count: 3 },
            FacetCount { value: "chocolate".to_string(), count: 2 },
            FacetCount { value: "eggless".to_string(), count: 2 },
            FacetCount { value: "seasonal".to_string(), count: 2 },
        ]
    );
}
