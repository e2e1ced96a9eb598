use loyalty_core_db::models::promotion::{PromotionModel, PromotionType};

use super::{date, fixture_id, FixtureKind};

pub fn promotions() -> Vec<PromotionModel> {
    vec![
        PromotionModel {
            id: fixture_id(FixtureKind::Promotion, 1),
            name: "Thingyan Double Points".to_string(),
            description: "Earn double points on every purchase during the water festival.".to_string(),
            promotion_type: PromotionType::DoublePoints,
            start_date: date(2024, 4, 10),
            end_date: date(2024, 4, 20),
        },
        PromotionModel {
            id: fixture_id(FixtureKind::Promotion, 2),
            name: "Monsoon Sale".to_string(),
            description: "15% off selected home goods.".to_string(),
            promotion_type: PromotionType::Discount,
            start_date: date(2024, 6, 1),
            end_date: date(2024, 7, 31),
        },
        PromotionModel {
            id: fixture_id(FixtureKind::Promotion, 3),
            name: "Thadingyut Gift".to_string(),
            description: "Free lantern set with purchases over 200,000 MMK.".to_string(),
            promotion_type: PromotionType::Gift,
            start_date: date(2024, 10, 15),
            end_date: date(2024, 10, 18),
        },
    ]
}
