// common/mod.rs - Shared test utilities for building catalogs
//
// Small builders so each suite can assemble minimal product lists
// without repeating the full struct literal every time. Suites that
// need a realistic catalog use `cake_catalog::fixtures::sample_catalog`.
#![allow(dead_code)]

use cake_catalog::{Category, Product, Review};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A minimal in-stock birthday cake; tests override the fields they care about
pub fn product(id: i32, name: &str, price: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: String::new(),
        category: Category::Birthday,
        price: Decimal::from(price),
        rating: 4.0,
        tags: Vec::new(),
        in_stock: true,
        featured: false,
        bestseller: false,
        delivery_time: "standard".to_string(),
        created_at: None,
        reviews: Vec::new(),
        images: Vec::new(),
        ingredients: None,
        delivery_info: None,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid test date")
        .and_time(NaiveTime::MIN)
}

/// N approved five-star stub reviews, for popularity ordering
pub fn stub_reviews(n: usize) -> Vec<Review> {
    (0..n)
        .map(|i| Review {
            id: Uuid::from_u128(i as u128 + 1),
            user_id: format!("user-{}", i),
            user_name: format!("User {}", i),
            rating: 5,
            comment: "ok".to_string(),
            approved: true,
            featured: false,
            created_at: date(2024, 1, 1),
            images: Vec::new(),
        })
        .collect()
}

pub fn ids(products: &[&Product]) -> Vec<i32> {
    products.iter().map(|p| p.id).collect()
}

/// Opt-in log output for a suite: RUST_LOG=debug cargo test
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
