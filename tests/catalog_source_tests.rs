/// Catalog source tests
///
/// Covers JSON ingestion: lenient record normalization, the timestamp
/// parse chain, validation failures, and the Catalog passthroughs.
mod common;

use anyhow::Result;
use cake_catalog::fixtures::sample_catalog;
use cake_catalog::{Catalog, CatalogError, Query, SortKey};
use common::{ids, init_logging, product};
use rust_decimal::Decimal;

const MINIMAL_CATALOG: &str = r#"[
    {
        "id": 1,
        "name": "Chocolate Truffle",
        "description": "Rich dark chocolate sponge",
        "category": "birthday",
        "price": 599,
        "rating": 4.6,
        "tags": ["chocolate", "classic"],
        "bestseller": true,
        "delivery_time": "same-day",
        "created_at": "2024-01-10"
    },
    {
        "id": 2,
        "name": "Classic Vanilla Sponge",
        "description": "Light vanilla sponge",
        "category": "birthday",
        "price": 499
    }
]"#;

#[test]
fn test_load_catalog_from_json() -> Result<()> {
    init_logging();
    let catalog = Catalog::from_json_str(MINIMAL_CATALOG)?;

    assert_eq!(catalog.len(), 2);
    let truffle = catalog.find(1).expect("product 1 present");
    assert_eq!(truffle.tags, vec!["chocolate", "classic"]);
    assert!(truffle.bestseller);
    assert_eq!(
        truffle.created_at.map(|t| t.date().to_string()),
        Some("2024-01-10".to_string())
    );

    // Omitted fields fall back to defaults
    let sponge = catalog.find(2).expect("product 2 present");
    assert_eq!(sponge.rating, 0.0);
    assert!(sponge.in_stock);
    assert_eq!(sponge.delivery_time, "standard");
    assert!(sponge.created_at.is_none());
    assert!(sponge.reviews.is_empty());
    Ok(())
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let err = Catalog::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn test_duplicate_id_rejected() {
    let products = vec![product(1, "A", 100), product(1, "B", 200)];
    let err = Catalog::from_products(products).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(1)));
}

#[test]
fn test_out_of_range_rating_rejected() {
    let mut bad = product(3, "C", 100);
    bad.rating = 7.5;
    let err = Catalog::from_products(vec![bad]).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidRating { id: 3, .. }));
}

#[test]
fn test_negative_price_rejected() {
    let mut bad = product(4, "D", 100);
    bad.price = Decimal::from(-1);
    let err = Catalog::from_products(vec![bad]).unwrap_err();
    assert!(matches!(err, CatalogError::NegativePrice { id: 4 }));
}

#[test]
fn test_unparseable_created_at_sorts_oldest() -> Result<()> {
    let json = r#"[
        {"id": 1, "name": "Dated", "description": "", "category": "custom",
         "price": 100, "created_at": "2020-01-01"},
        {"id": 2, "name": "Garbled", "description": "", "category": "custom",
         "price": 100, "created_at": "sometime last spring"}
    ]"#;
    let catalog = Catalog::from_json_str(json)?;

    let query = Query {
        sort_key: SortKey::Newest,
        ..Query::default()
    };
    // The garbled timestamp normalizes to None and sinks to the end
    assert_eq!(ids(&catalog.search(&query)), vec![1, 2]);
    Ok(())
}

#[test]
fn test_catalog_passthroughs_match_engine() -> Result<()> {
    let catalog = Catalog::from_products(sample_catalog())?;

    assert_eq!(catalog.len(), 10);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.find(8).map(|p| p.name.as_str()), Some("Three-Tier Wedding Classic"));
    assert!(catalog.find(999).is_none());

    let facets = catalog.facets();
    assert_eq!(facets.delivery_times, vec!["same-day", "next-day", "two-day"]);

    let result = catalog.search(&Query::default());
    assert_eq!(result.len(), 10);
    assert_eq!(result[0].id, 4, "most-reviewed product leads by default");
    Ok(())
}

#[test]
fn test_empty_document_is_an_empty_catalog() -> Result<()> {
    let catalog = Catalog::from_json_str("[]")?;
    assert!(catalog.is_empty());
    assert!(catalog.search(&Query::default()).is_empty());
    Ok(())
}
