// catalog/source.rs - Catalog ingestion and validation
//
// The engine assumes well-typed input; this module is the boundary where
// that assumption is earned. External catalog documents arrive as lenient
// `ProductRecord`s (optional fields, string timestamps), get normalized
// into `Product`s, and are validated into a `Catalog` handle. It is the
// only part of the crate with failure modes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::catalog::engine;
use crate::catalog::model::{Category, Facets, Product, Query, Review};

/// Product as it appears in an external catalog document (flexible schema)
///
/// Everything the storefront can live without is optional here and gets a
/// default during normalization.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub price: Decimal,
    pub rating: Option<f64>,
    pub tags: Option<Vec<String>>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
    pub bestseller: Option<bool>,
    pub delivery_time: Option<String>,
    pub created_at: Option<String>,
    pub reviews: Option<Vec<Review>>,
    pub images: Option<Vec<String>>,
    pub ingredients: Option<String>,
    pub delivery_info: Option<String>,
}

impl ProductRecord {
    /// Apply defaults and coerce loose fields into the engine's types
    ///
    /// Tags are de-duplicated preserving first occurrence. A timestamp
    /// that is absent or unparseable becomes `None`, which the newest-first
    /// sort treats as the oldest possible value.
    pub fn normalize(self) -> Product {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.tags.unwrap_or_default() {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            price: self.price,
            rating: self.rating.unwrap_or(0.0),
            tags,
            in_stock: self.in_stock.unwrap_or(true),
            featured: self.featured.unwrap_or(false),
            bestseller: self.bestseller.unwrap_or(false),
            delivery_time: self
                .delivery_time
                .unwrap_or_else(|| "standard".to_string()),
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            reviews: self.reviews.unwrap_or_default(),
            images: self.images.unwrap_or_default(),
            ingredients: self.ingredients,
            delivery_info: self.delivery_info,
        }
    }
}

/// Accept RFC 3339, a bare datetime, or a bare date (midnight)
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Ways loading a catalog document can fail
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id {0}")]
    DuplicateId(i32),
    #[error("product {id} has rating {rating}, expected 0.0-5.0")]
    InvalidRating { id: i32, rating: f64 },
    #[error("product {id} has a negative price")]
    NegativePrice { id: i32 },
}

/// The full in-memory list of products available for browsing
///
/// Owns the product entities; queries borrow them. Construction validates
/// id uniqueness and value ranges so the engine never has to.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(CatalogError::InvalidRating {
                    id: product.id,
                    rating: product.rating,
                });
            }
            if product.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice { id: product.id });
            }
        }
        Ok(Self { products })
    }

    /// Load a catalog from a JSON array of product records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        let products = records.into_iter().map(ProductRecord::normalize).collect();
        let catalog = Self::from_products(products)?;
        tracing::info!("catalog loaded: {} products", catalog.len());
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Run the full filter + sort pipeline against this catalog
    pub fn search(&self, query: &Query) -> Vec<&Product> {
        engine::search(&self.products, query)
    }

    pub fn facets(&self) -> Facets {
        engine::derive_facets(&self.products)
    }

    pub fn find(&self, id: i32) -> Option<&Product> {
        engine::find_product(&self.products, id)
    }
}
