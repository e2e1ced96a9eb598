use loyalty_core_db::models::product::ProductModel;

use super::{fixture_id, mmk, FixtureKind};

pub fn products() -> Vec<ProductModel> {
    [
        (1, "Jade Bracelet", "Hand-carved Kachin jade.", 450_000, Some(399_000), 12),
        (2, "Teak Serving Tray", "Reclaimed Burmese teak.", 85_000, None, 30),
        (3, "Lacquerware Bowl Set", "Traditional Bagan lacquerware, set of four.", 120_000, Some(99_000), 18),
        (4, "Shan Green Tea", "Loose leaf, 500g tin.", 18_000, None, 200),
    ]
    .into_iter()
    .map(|(n, name, description, price, discount, stock)| ProductModel {
        id: fixture_id(FixtureKind::Product, n),
        name: name.to_string(),
        description: description.to_string(),
        price: mmk(price),
        discount_price: discount.map(mmk),
        image_urls: vec![format!("https://picsum.photos/seed/product{n}/600/600")],
        stock,
    })
    .collect()
}
