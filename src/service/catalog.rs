use chrono::{DateTime, TimeZone, Utc};

use crate::domain::Product;

fn listed_at(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    in_stock: bool,
    listed: DateTime<Utc>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        in_stock,
        created_at: listed,
        updated_at: listed,
    }
}

/// The catalog a freshly started service is seeded with.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Laptop Pro",
            "High-performance laptop for professionals",
            1299.99,
            "Electronics",
            true,
            listed_at(1, 15, 10, 0),
        ),
        product(
            "2",
            "Wireless Headphones",
            "Premium noise-cancelling wireless headphones",
            299.99,
            "Electronics",
            true,
            listed_at(1, 16, 9, 30),
        ),
        product(
            "3",
            "Coffee Maker",
            "Automatic drip coffee maker with timer",
            89.99,
            "Home & Kitchen",
            false,
            listed_at(1, 17, 14, 15),
        ),
        product(
            "4",
            "Running Shoes",
            "Comfortable running shoes with excellent cushioning",
            129.99,
            "Sports",
            true,
            listed_at(1, 18, 11, 45),
        ),
        product(
            "5",
            "Desk Lamp",
            "LED desk lamp with adjustable brightness",
            45.99,
            "Home & Office",
            true,
            listed_at(1, 19, 16, 20),
        ),
    ]
}
