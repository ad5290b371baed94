// fixtures/mod.rs - Reusable sample catalog
//
// A small, fixed set of categories and products shared by unit tests,
// integration tests and the stub API servers they spin up. Keeping the data
// in one place means every test agrees on ids, names and prices.

use rust_decimal::Decimal;

use crate::listing::model::{Category, Product};

pub fn sample_categories() -> Vec<Category> {
    ["Sneakers", "T-Shirt", "Pants", "Cap", "Hoodie"]
        .iter()
        .enumerate()
        .map(|(i, name)| Category {
            id: i as i32 + 1,
            name: name.to_string(),
        })
        .collect()
}

/// Thirty products spread over the sample categories
pub fn sample_products() -> Vec<Product> {
    const NAMES: [&str; 6] = [
        "Classic",
        "Linen",
        "Heavyweight",
        "Vintage",
        "Slim Fit",
        "Oversized",
    ];
    let kinds = sample_categories();

    (0..30)
        .map(|i| {
            let category = &kinds[i % kinds.len()];
            Product {
                id: i as i32 + 1,
                name: format!("{} {}", NAMES[i % NAMES.len()], category.name),
                price: Decimal::from(19_000 + (i as i64 * 3_500)),
                image_url: if i % 4 == 0 {
                    None
                } else {
                    Some(format!("https://images.example.com/products/{}.jpg", i + 1))
                },
                category_id: category.id,
            }
        })
        .collect()
}
