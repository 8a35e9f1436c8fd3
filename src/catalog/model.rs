// catalog/model.rs - Shared data models for the catalog query engine
//
// These structs are used throughout the crate for type-safe communication
// between the catalog source, the query engine, and the presentation
// layer that renders results.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cake category enumeration (closed set)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Birthday,
    Wedding,
    Anniversary,
    Cupcake,
    Cheesecake,
    Custom,
}

impl Category {
    /// Every category, in the order filter controls list them
    pub const ALL: [Category; 6] = [
        Category::Birthday,
        Category::Wedding,
        Category::Anniversary,
        Category::Cupcake,
        Category::Cheesecake,
        Category::Custom,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Birthday => write!(f, "Birthday"),
            Category::Wedding => write!(f, "Wedding"),
            Category::Anniversary => write!(f, "Anniversary"),
            Category::Cupcake => write!(f, "Cupcake"),
            Category::Cheesecake => write!(f, "Cheesecake"),
            Category::Custom => write!(f, "Custom"),
        }
    }
}

/// A product in the catalog
///
/// Supplied by the catalog source and never mutated by the engine;
/// query results borrow these entities.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub price: Decimal,
    pub rating: f64,
    pub tags: Vec<String>,
    pub in_stock: bool,
    pub featured: bool,
    pub bestseller: bool,
    pub delivery_time: String,
    pub created_at: Option<NaiveDateTime>,
    pub reviews: Vec<Review>,
    pub images: Vec<String>,
    pub ingredients: Option<String>,
    pub delivery_info: Option<String>,
}

/// A customer review attached to a product
///
/// The engine reads these (count, approval, rating) but never writes them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub approved: bool,
    pub featured: bool,
    pub created_at: NaiveDateTime,
    pub images: Vec<String>,
}

/// Inclusive price bounds, always active regardless of the advanced gate
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    /// The storefront's full default range
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::from(10_000),
        }
    }
}

/// Sort order for query results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Popularity, // Review count, descending
    PriceAsc,
    PriceDesc,
    RatingDesc,
    Newest,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Popularity => write!(f, "Most Popular"),
            SortKey::PriceAsc => write!(f, "Price: Low to High"),
            SortKey::PriceDesc => write!(f, "Price: High to Low"),
            SortKey::RatingDesc => write!(f, "Highest Rated"),
            SortKey::Newest => write!(f, "Newest"),
        }
    }
}

/// The complete set of user-selected filter and sort parameters
///
/// The presentation layer owns the UI state and constructs a fresh Query
/// on every input event; the engine holds no state between calls.
///
/// `None` in `category` and `delivery_time` means "all". The advanced
/// predicates (tags, stock, featured, bestseller, rating, delivery time)
/// apply only while `advanced_filters` is set; their stored values are
/// retained but inert while the group is collapsed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub search_term: String,
    pub category: Option<Category>,
    pub price_range: PriceRange,
    pub tags: Vec<String>,
    pub in_stock_only: bool,
    pub featured_only: bool,
    pub bestseller_only: bool,
    pub min_rating: f64,
    pub delivery_time: Option<String>,
    pub advanced_filters: bool,
    pub sort_key: SortKey,
}

impl Query {
    /// Add the tag if absent, remove it if present
    pub fn toggle_tag(&mut self, tag: &str) {
        match self.tags.iter().position(|t| t == tag) {
            Some(idx) => {
                self.tags.remove(idx);
            }
            None => self.tags.push(tag.to_string()),
        }
    }

    /// Reset every filter field to its default
    ///
    /// The sort key and the advanced-filters gate are left untouched,
    /// matching the storefront's "Clear All" action.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.category = None;
        self.price_range = PriceRange::default();
        self.tags.clear();
        self.in_stock_only = false;
        self.featured_only = false;
        self.bestseller_only = false;
        self.min_rating = 0.0;
        self.delivery_time = None;
    }

    /// Describe each criterion currently narrowing the result set
    ///
    /// Advanced criteria are listed only while the gate is on; a toggle
    /// checked inside a collapsed group contributes nothing.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        if !self.search_term.is_empty() {
            active.push(ActiveFilter::Search(self.search_term.clone()));
        }
        if let Some(category) = self.category {
            active.push(ActiveFilter::Category(category));
        }
        if self.price_range != PriceRange::default() {
            active.push(ActiveFilter::Price(self.price_range));
        }
        if self.advanced_filters {
            for tag in &self.tags {
                active.push(ActiveFilter::Tag(tag.clone()));
            }
            if self.in_stock_only {
                active.push(ActiveFilter::InStock);
            }
            if self.featured_only {
                active.push(ActiveFilter::Featured);
            }
            if self.bestseller_only {
                active.push(ActiveFilter::Bestseller);
            }
            if self.min_rating > 0.0 {
                active.push(ActiveFilter::MinRating(self.min_rating));
            }
            if let Some(delivery) = &self.delivery_time {
                active.push(ActiveFilter::Delivery(delivery.clone()));
            }
        }
        active
    }

    pub fn has_active_filters(&self) -> bool {
        !self.active_filters().is_empty()
    }
}

/// One active filter criterion, displayable as a removal badge
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveFilter {
    Search(String),
    Category(Category),
    Price(PriceRange),
    Tag(String),
    InStock,
    Featured,
    Bestseller,
    MinRating(f64),
    Delivery(String),
}

impl std::fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveFilter::Search(term) => write!(f, "Search: {}", term),
            ActiveFilter::Category(category) => write!(f, "Category: {}", category),
            ActiveFilter::Price(range) => write!(f, "Price: ₹{} - ₹{}", range.min, range.max),
            ActiveFilter::Tag(tag) => write!(f, "Tag: {}", tag),
            ActiveFilter::InStock => write!(f, "In Stock"),
            ActiveFilter::Featured => write!(f, "Featured"),
            ActiveFilter::Bestseller => write!(f, "Bestseller"),
            ActiveFilter::MinRating(rating) => write!(f, "Rating: {}+", rating),
            ActiveFilter::Delivery(delivery) => write!(f, "Delivery: {}", delivery),
        }
    }
}

/// De-duplicated filterable dimensions observed across the catalog
///
/// Iteration order is first occurrence in the product list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    pub tags: Vec<String>,
    pub delivery_times: Vec<String>,
}

/// Facet value with its product count
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Count and mean rating over a product's approved reviews
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub count: usize,
    pub average: f64,
}
