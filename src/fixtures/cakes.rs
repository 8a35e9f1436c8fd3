// fixtures/cakes.rs - A realistic sample cake catalog
//
// Ten cakes chosen to exercise the query engine end to end: every
// category is represented, tag sets overlap, delivery buckets repeat,
// stock/featured/bestseller flags are mixed, two products have no
// creation timestamp, and review lists include unapproved entries.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::catalog::model::{Category, Product, Review};

fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid fixture date")
        .and_time(NaiveTime::MIN)
}

fn review(
    seq: u128,
    user_name: &str,
    rating: u8,
    comment: &str,
    approved: bool,
    created_at: NaiveDateTime,
) -> Review {
    Review {
        id: Uuid::from_u128(seq),
        user_id: format!("user-{}", seq),
        user_name: user_name.to_string(),
        rating,
        comment: comment.to_string(),
        approved,
        featured: false,
        created_at,
        images: Vec::new(),
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The shared sample catalog
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Chocolate Truffle".to_string(),
            description: "Rich dark chocolate sponge layered with silky truffle ganache"
                .to_string(),
            category: Category::Birthday,
            price: Decimal::from(599),
            rating: 4.6,
            tags: tags(&["chocolate", "classic"]),
            in_stock: true,
            featured: false,
            bestseller: true,
            delivery_time: "same-day".to_string(),
            created_at: Some(dt(2024, 1, 10)),
            reviews: vec![
                review(11, "Priya Sharma", 5, "Moist and decadent, arrived on time", true, dt(2024, 2, 2)),
                review(12, "Arjun Mehta", 5, "Best truffle in town", true, dt(2024, 2, 18)),
                review(13, "Neha Gupta", 4, "Lovely ganache, slightly sweet for me", true, dt(2024, 3, 5)),
                review(14, "Rohan Das", 2, "Box was dented", false, dt(2024, 3, 9)),
            ],
            images: vec![
                "/images/cakes/chocolate-truffle-1.jpg".to_string(),
                "/images/cakes/chocolate-truffle-2.jpg".to_string(),
            ],
            ingredients: Some("Dark chocolate, cream, flour, eggs, butter".to_string()),
            delivery_info: Some("Same-day delivery for orders before 4 PM".to_string()),
        },
        Product {
            id: 2,
            name: "Classic Vanilla Sponge".to_string(),
            description: "Light vanilla sponge with fresh cream frosting".to_string(),
            category: Category::Birthday,
            price: Decimal::from(499),
            rating: 4.2,
            tags: tags(&["classic", "eggless"]),
            in_stock: true,
            featured: false,
            bestseller: false,
            delivery_time: "next-day".to_string(),
            created_at: Some(dt(2023, 11, 5)),
            reviews: vec![
                review(21, "Kavita Rao", 4, "Simple and fresh", true, dt(2023, 12, 1)),
                review(22, "Suresh Iyer", 4, "Kids loved it", true, dt(2024, 1, 14)),
            ],
            images: vec!["/images/cakes/vanilla-sponge-1.jpg".to_string()],
            ingredients: Some("Flour, sugar, cream, vanilla extract".to_string()),
            delivery_info: None,
        },
        Product {
            id: 3,
            name: "Red Velvet Royale".to_string(),
            description: "Velvety cocoa layers with cream cheese frosting for anniversaries"
                .to_string(),
            category: Category::Anniversary,
            price: Decimal::from(899),
            rating: 4.8,
            tags: tags(&["premium"]),
            in_stock: true,
            featured: true,
            bestseller: false,
            delivery_time: "same-day".to_string(),
            created_at: Some(dt(2024, 3, 15)),
            reviews: vec![
                review(31, "Meera Nair", 5, "Stunning centerpiece for our anniversary", true, dt(2024, 4, 2)),
                review(32, "Vikram Singh", 5, "Perfect balance of sweet and tangy", true, dt(2024, 4, 20)),
                review(33, "Anita Desai", 4, "Gorgeous, a touch pricey", true, dt(2024, 5, 1)),
            ],
            images: vec!["/images/cakes/red-velvet-1.jpg".to_string()],
            ingredients: Some("Cocoa, cream cheese, buttermilk, flour".to_string()),
            delivery_info: Some("Same-day delivery for orders before 4 PM".to_string()),
        },
        Product {
            id: 4,
            name: "Rasmalai Fusion".to_string(),
            description: "Saffron-soaked rasmalai folded into a cardamom sponge".to_string(),
            category: Category::Custom,
            price: Decimal::from(1299),
            rating: 4.7,
            tags: tags(&["premium", "seasonal"]),
            in_stock: true,
            featured: true,
            bestseller: true,
            delivery_time: "next-day".to_string(),
            created_at: Some(dt(2024, 5, 20)),
            reviews: vec![
                review(41, "Divya Menon", 5, "Fusion done right", true, dt(2024, 6, 1)),
                review(42, "Karan Johar", 5, "Showstopper at the party", true, dt(2024, 6, 4)),
                review(43, "Lata Krishnan", 4, "Fragrant and rich", true, dt(2024, 6, 10)),
                review(44, "Amit Verma", 5, "Ordering again", true, dt(2024, 6, 15)),
                review(45, "Sneha Pillai", 4, "Loved the saffron notes", true, dt(2024, 6, 21)),
            ],
            images: vec!["/images/cakes/rasmalai-fusion-1.jpg".to_string()],
            ingredients: Some("Rasmalai, saffron, cardamom, flour, cream".to_string()),
            delivery_info: None,
        },
        Product {
            id: 5,
            name: "Mango Cheesecake".to_string(),
            description: "Baked cheesecake topped with alphonso mango glaze".to_string(),
            category: Category::Cheesecake,
            price: Decimal::from(1099),
            rating: 4.5,
            tags: tags(&["fruit", "seasonal"]),
            in_stock: false,
            featured: false,
            bestseller: false,
            delivery_time: "two-day".to_string(),
            created_at: Some(dt(2024, 4, 2)),
            reviews: vec![
                review(51, "Farah Khan", 3, "Glaze melted in transit", false, dt(2024, 5, 3)),
            ],
            images: vec!["/images/cakes/mango-cheesecake-1.jpg".to_string()],
            ingredients: Some("Cream cheese, alphonso mango, biscuit base".to_string()),
            delivery_info: Some("Ships chilled, allow two days".to_string()),
        },
        Product {
            id: 6,
            name: "Blueberry Cheesecake".to_string(),
            description: "No-bake cheesecake with a tart blueberry compote".to_string(),
            category: Category::Cheesecake,
            price: Decimal::from(1199),
            rating: 4.4,
            tags: tags(&["fruit", "premium"]),
            in_stock: true,
            featured: false,
            bestseller: false,
            delivery_time: "two-day".to_string(),
            created_at: None,
            reviews: Vec::new(),
            images: vec!["/images/cakes/blueberry-cheesecake-1.jpg".to_string()],
            ingredients: Some("Cream cheese, blueberries, biscuit base".to_string()),
            delivery_info: Some("Ships chilled, allow two days".to_string()),
        },
        Product {
            id: 7,
            name: "Assorted Cupcake Box".to_string(),
            description: "Box of six cupcakes across our classic flavours".to_string(),
            category: Category::Cupcake,
            price: Decimal::from(449),
            rating: 4.1,
            tags: tags(&["classic"]),
            in_stock: true,
            featured: false,
            bestseller: false,
            delivery_time: "same-day".to_string(),
            created_at: Some(dt(2023, 9, 18)),
            reviews: vec![
                review(71, "Ishaan Roy", 4, "Great variety", true, dt(2023, 10, 2)),
                review(72, "Pooja Shetty", 4, "Fresh and soft", true, dt(2023, 11, 11)),
            ],
            images: vec!["/images/cakes/cupcake-box-1.jpg".to_string()],
            ingredients: None,
            delivery_info: None,
        },
        Product {
            id: 8,
            name: "Three-Tier Wedding Classic".to_string(),
            description: "Elegant three-tier wedding cake with fondant florals".to_string(),
            category: Category::Wedding,
            price: Decimal::from(4999),
            rating: 4.9,
            tags: tags(&["premium", "classic"]),
            in_stock: true,
            featured: true,
            bestseller: false,
            delivery_time: "two-day".to_string(),
            created_at: Some(dt(2024, 6, 1)),
            reviews: vec![
                review(81, "Ritu Malhotra", 5, "Centerpiece of our wedding", true, dt(2024, 6, 20)),
                review(82, "Sameer Joshi", 5, "Flawless finish", true, dt(2024, 6, 28)),
                review(83, "Tanvi Kulkarni", 5, "Guests would not stop talking about it", true, dt(2024, 7, 3)),
            ],
            images: vec![
                "/images/cakes/wedding-classic-1.jpg".to_string(),
                "/images/cakes/wedding-classic-2.jpg".to_string(),
            ],
            ingredients: Some("Vanilla sponge, fondant, buttercream".to_string()),
            delivery_info: Some("Requires two days notice, setup included".to_string()),
        },
        Product {
            id: 9,
            name: "Eggless Chocolate Fudge".to_string(),
            description: "Dense eggless fudge cake with a molten chocolate center".to_string(),
            category: Category::Birthday,
            price: Decimal::from(649),
            rating: 4.3,
            tags: tags(&["chocolate", "eggless"]),
            in_stock: false,
            featured: false,
            bestseller: true,
            delivery_time: "next-day".to_string(),
            created_at: Some(dt(2024, 2, 14)),
            reviews: vec![
                review(91, "Nikhil Bhat", 4, "Hard to tell it is eggless", true, dt(2024, 3, 1)),
            ],
            images: vec!["/images/cakes/eggless-fudge-1.jpg".to_string()],
            ingredients: Some("Cocoa, condensed milk, flour, butter".to_string()),
            delivery_info: None,
        },
        Product {
            id: 10,
            name: "Pineapple Celebration".to_string(),
            description: "Juicy pineapple layers with whipped cream, a birthday staple"
                .to_string(),
            category: Category::Birthday,
            price: Decimal::from(549),
            rating: 3.9,
            tags: tags(&["fruit", "classic"]),
            in_stock: true,
            featured: false,
            bestseller: false,
            delivery_time: "same-day".to_string(),
            created_at: None,
            reviews: Vec::new(),
            images: vec!["/images/cakes/pineapple-1.jpg".to_string()],
            ingredients: Some("Pineapple, whipped cream, sponge".to_string()),
            delivery_info: None,
        },
    ]
}
