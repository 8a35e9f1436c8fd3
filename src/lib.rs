// lib.rs - Root module for the cake-catalog library
//
// This crate implements the catalog query engine behind a bakery
// storefront: pure functions that take an in-memory product list and a
// query (search text, category, price bounds, tags, toggles, sort key)
// and deterministically produce an ordered, filtered view, plus the
// facet sets used to populate filter controls.
//
// Rendering, navigation, and cart side effects live with the caller;
// this library owns no mutable state and performs no I/O beyond
// deserializing a catalog document handed to it.

pub mod catalog;

/// The fixtures module contains a reusable sample catalog for tests and demos
pub mod fixtures;

pub use catalog::engine::{
    approved_reviews, category_facets, derive_facets, filter_products, find_product,
    review_summary, search, sort_products, tag_facets,
};
pub use catalog::model::{
    ActiveFilter, Category, FacetCount, Facets, PriceRange, Product, Query, Review,
    ReviewSummary, SortKey,
};
pub use catalog::source::{Catalog, CatalogError, ProductRecord};
