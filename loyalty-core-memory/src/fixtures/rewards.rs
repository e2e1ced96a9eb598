use loyalty_core_db::models::reward::{RewardModel, RewardType};

use super::{fixture_id, FixtureKind};

pub fn rewards() -> Vec<RewardModel> {
    [
        (1, "10,000 MMK Shopping Voucher", RewardType::Voucher, 1_000, 250),
        (2, "Premium Coffee Set", RewardType::Product, 3_500, 40),
        (3, "Thingyan Gift Box", RewardType::Seasonal, 6_000, 15),
        (4, "50,000 MMK Shopping Voucher", RewardType::Voucher, 4_500, 100),
        (5, "Silk Longyi", RewardType::Product, 12_000, 8),
        (6, "Spa Day Package", RewardType::Product, 25_000, 0),
    ]
    .into_iter()
    .map(|(n, name, reward_type, points_cost, stock)| RewardModel {
        id: fixture_id(FixtureKind::Reward, n),
        name: name.to_string(),
        reward_type,
        points_cost,
        image_url: format!("https://picsum.photos/seed/reward{n}/400/300"),
        stock,
    })
    .collect()
}
