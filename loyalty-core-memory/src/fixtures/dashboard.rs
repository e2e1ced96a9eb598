use loyalty_core_api::domain::Tier;
use loyalty_core_db::models::dashboard::{
    DashboardModel, PointsTrendPoint, RedeemedItem, SalesPoint, TierCount,
};

use super::date;

pub fn dashboard() -> DashboardModel {
    DashboardModel {
        total_members: 12_480,
        active_promotions: 3,
        total_points_redeemed: 1_845_200,
        tier_distribution: vec![
            TierCount { name: Tier::Normal, value: 8_120 },
            TierCount { name: Tier::Gold, value: 2_960 },
            TierCount { name: Tier::Platinum, value: 1_050 },
            TierCount { name: Tier::Diamond, value: 350 },
        ],
        sales_vs_redemption: [
            ("Jan", 4_000, 2_400),
            ("Feb", 3_000, 1_398),
            ("Mar", 5_000, 3_800),
            ("Apr", 4_780, 3_908),
            ("May", 5_890, 4_800),
            ("Jun", 4_390, 3_800),
        ]
        .into_iter()
        .map(|(month, sales, redemptions)| SalesPoint {
            month: month.to_string(),
            sales,
            redemptions,
        })
        .collect(),
        most_redeemed_items: [
            ("10,000 MMK Shopping Voucher", 1_204),
            ("Premium Coffee Set", 642),
            ("Thingyan Gift Box", 388),
            ("Silk Longyi", 97),
        ]
        .into_iter()
        .map(|(name, count)| RedeemedItem {
            name: name.to_string(),
            count,
        })
        .collect(),
        points_usage_trends: [
            ((2024, 5, 6), 42_000),
            ((2024, 5, 13), 51_500),
            ((2024, 5, 20), 47_800),
            ((2024, 5, 27), 63_200),
        ]
        .into_iter()
        .map(|((y, m, d), points)| PointsTrendPoint {
            date: date(y, m, d),
            points,
        })
        .collect(),
    }
}
