// catalog/mod.rs - Root module for the catalog query engine
//
// Architecture:
// - model: shared data types (products, reviews, queries, facets)
// - engine: pure filter/sort/facet functions over a product slice
// - source: catalog ingestion and validation (the catalog source boundary)
//
// The engine functions in `engine` are the core of the crate; `model`
// holds the types they exchange with the caller, and `source` is the
// only place where anything can fail.

pub mod engine;
pub mod model;
pub mod source;

// Re-export the handle most callers start from
pub use source::Catalog;
