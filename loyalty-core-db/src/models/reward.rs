use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Redeemable catalogue item. Redemption never decrements `stock`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardModel {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub reward_type: RewardType,
    pub points_cost: i64,
    pub image_url: String,
    pub stock: u32,
}

impl Identifiable for RewardModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardType {
    Voucher,
    Product,
    Seasonal,
}

impl std::fmt::Display for RewardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RewardType::Voucher => write!(f, "Voucher"),
            RewardType::Product => write!(f, "Product"),
            RewardType::Seasonal => write!(f, "Seasonal"),
        }
    }
}

impl FromStr for RewardType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Voucher" => Ok(RewardType::Voucher),
            "Product" => Ok(RewardType::Product),
            "Seasonal" => Ok(RewardType::Seasonal),
            _ => Err(()),
        }
    }
}
