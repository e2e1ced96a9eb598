use chrono::NaiveDate;
use loyalty_core_api::domain::Tier;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Financial event tied to a member. The tier is captured at transaction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionModel {
    pub id: Uuid,
    pub member_id: Uuid,
    pub member_name: String,
    pub member_tier: Tier,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub status: TransactionStatus,
    pub description: String,
}

impl Identifiable for TransactionModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl TransactionModel {
    pub fn is_success(&self) -> bool {
        self.status == TransactionStatus::Success
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    Success,
    Failed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Success => write!(f, "Success"),
            TransactionStatus::Failed => write!(f, "Failed"),
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Success" => Ok(TransactionStatus::Success),
            "Failed" => Ok(TransactionStatus::Failed),
            _ => Err(()),
        }
    }
}
