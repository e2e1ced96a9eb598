use chrono::NaiveDate;
use loyalty_core_api::domain::Tier;
use serde::{Deserialize, Serialize};

/// Precomputed admin dashboard snapshot. This is its own payload and is not
/// derived from the other collections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardModel {
    pub total_members: u64,
    pub active_promotions: u32,
    pub total_points_redeemed: u64,
    pub tier_distribution: Vec<TierCount>,
    pub sales_vs_redemption: Vec<SalesPoint>,
    pub most_redeemed_items: Vec<RedeemedItem>,
    pub points_usage_trends: Vec<PointsTrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierCount {
    pub name: Tier,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub month: String,
    pub sales: u64,
    pub redemptions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeemedItem {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsTrendPoint {
    pub date: NaiveDate,
    pub points: u64,
}
