// catalog/engine.rs - Pure query functions over the product catalog
//
// Philosophy: pure functions that take a product slice and parameters,
// return typed results. No side effects, no internal state, easy to test.
// Every invocation is independent; the caller re-runs the query on each
// input event and the results borrow the products they were given.

use crate::catalog::model::{FacetCount, Facets, Product, Query, Review, ReviewSummary, SortKey};

/// Keep the products matching every predicate of the query
///
/// Input order is preserved; the input slice is never reordered or
/// mutated. An empty result is a valid outcome, not an error.
pub fn filter_products<'a>(products: &'a [Product], query: &Query) -> Vec<&'a Product> {
    let term = query.search_term.to_lowercase();
    products.iter().filter(|p| matches(p, query, &term)).collect()
}

/// Conjunction of independent predicates; `term` is the lowercased search
/// text so it is computed once per query rather than once per product.
fn matches(product: &Product, query: &Query, term: &str) -> bool {
    let matches_search = term.is_empty()
        || product.name.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term);

    let matches_category = query.category.map_or(true, |c| product.category == c);
    let matches_price = query.price_range.contains(product.price);

    // Advanced predicates are inert while the group is collapsed: each one
    // passes whenever the gate is off, whatever its stored toggle says.
    let advanced = query.advanced_filters;
    let matches_tags = !advanced
        || query.tags.is_empty()
        || query.tags.iter().any(|t| product.tags.contains(t));
    let matches_stock = !advanced || !query.in_stock_only || product.in_stock;
    let matches_featured = !advanced || !query.featured_only || product.featured;
    let matches_bestseller = !advanced || !query.bestseller_only || product.bestseller;
    // No individual bypass here: the default floor of 0 is already a no-op
    let matches_rating = !advanced || product.rating >= query.min_rating;
    let matches_delivery = !advanced
        || query
            .delivery_time
            .as_deref()
            .map_or(true, |d| product.delivery_time == d);

    matches_search
        && matches_category
        && matches_price
        && matches_tags
        && matches_stock
        && matches_featured
        && matches_bestseller
        && matches_rating
        && matches_delivery
}

/// Order a filtered set by the given key
///
/// All comparisons go through a stable sort, so products with equal keys
/// keep their relative order from the input list.
pub fn sort_products<'a>(mut products: Vec<&'a Product>, key: SortKey) -> Vec<&'a Product> {
    match key {
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::RatingDesc => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        // Option orders None first, so descending sinks undated products to the end
        SortKey::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Popularity => products.sort_by(|a, b| b.reviews.len().cmp(&a.reviews.len())),
    }
    products
}

/// Filter then sort: the complete catalog query
pub fn search<'a>(products: &'a [Product], query: &Query) -> Vec<&'a Product> {
    let matched = filter_products(products, query);
    tracing::debug!(
        "catalog query: term='{}', sort={:?}, matched {}/{}",
        query.search_term,
        query.sort_key,
        matched.len(),
        products.len()
    );
    sort_products(matched, query.sort_key)
}

/// Collect the de-duplicated tag and delivery-time sets across the catalog
///
/// Used to populate filter controls. Order is first occurrence in the
/// product list, not sorted.
pub fn derive_facets(products: &[Product]) -> Facets {
    let mut facets = Facets::default();
    for product in products {
        for tag in &product.tags {
            if !facets.tags.contains(tag) {
                facets.tags.push(tag.clone());
            }
        }
        if !facets.delivery_times.contains(&product.delivery_time) {
            facets.delivery_times.push(product.delivery_time.clone());
        }
    }
    facets
}

/// Per-category product counts, largest first
///
/// Ties keep first-occurrence order (stable sort).
pub fn category_facets(products: &[Product]) -> Vec<FacetCount> {
    let mut counts: Vec<FacetCount> = Vec::new();
    for product in products {
        bump_count(&mut counts, &product.category.to_string());
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Per-tag product counts, largest first
pub fn tag_facets(products: &[Product]) -> Vec<FacetCount> {
    let mut counts: Vec<FacetCount> = Vec::new();
    for product in products {
        for tag in &product.tags {
            bump_count(&mut counts, tag);
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

fn bump_count(counts: &mut Vec<FacetCount>, value: &str) {
    match counts.iter_mut().find(|f| f.value == value) {
        Some(facet) => facet.count += 1,
        None => counts.push(FacetCount {
            value: value.to_string(),
            count: 1,
        }),
    }
}

/// Look up a single product by id (the detail page entry point)
///
/// An unknown id is `None`, not an error; the caller renders its own
/// not-found state.
pub fn find_product(products: &[Product], id: i32) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

/// The reviews the detail page actually shows
pub fn approved_reviews(product: &Product) -> Vec<&Review> {
    product.reviews.iter().filter(|r| r.approved).collect()
}

/// Count and mean rating over a product's approved reviews
pub fn review_summary(product: &Product) -> ReviewSummary {
    let approved = approved_reviews(product);
    let count = approved.len();
    let average = if count == 0 {
        0.0
    } else {
        approved.iter().map(|r| f64::from(r.rating)).sum::<f64>() / count as f64
    };
    ReviewSummary { count, average }
}
