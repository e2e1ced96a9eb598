use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionModel {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub promotion_type: PromotionType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Identifiable for PromotionModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl PromotionModel {
    /// Status of the promotion as seen on `today`.
    pub fn status_on(&self, today: NaiveDate) -> PromotionStatus {
        if self.start_date <= today && today <= self.end_date {
            PromotionStatus::Active
        } else if today < self.start_date {
            PromotionStatus::Scheduled
        } else {
            PromotionStatus::Expired
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionType {
    Discount,
    #[serde(rename = "Double Points")]
    DoublePoints,
    Gift,
}

impl std::fmt::Display for PromotionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromotionType::Discount => write!(f, "Discount"),
            PromotionType::DoublePoints => write!(f, "Double Points"),
            PromotionType::Gift => write!(f, "Gift"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionStatus {
    Active,
    Scheduled,
    Expired,
}
