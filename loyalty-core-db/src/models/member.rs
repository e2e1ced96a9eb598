use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use loyalty_core_api::domain::Tier;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// A loyalty-program member.
///
/// `tier` is assigned upstream and is not reconciled with the tier rule
/// thresholds; spend only drives what progress is displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberModel {
    pub id: Uuid,
    /// Human-facing membership number, e.g. `M001`.
    pub code: HeaplessString<16>,
    pub name: String,
    pub email: String,
    pub phone: HeaplessString<20>,
    /// National registration card number.
    pub nrc: HeaplessString<32>,
    pub address: String,
    pub tier: Tier,
    /// Redeemable balance.
    pub points: i64,
    pub retail_spend: Decimal,
    pub wholesale_spend: Decimal,
    pub join_date: NaiveDate,
    pub last_visit_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub visit_frequency: u32,
    pub is_birthday: bool,
    pub login_count: u32,
    pub last_login: DateTime<Utc>,
}

impl Identifiable for MemberModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl MemberModel {
    /// Case-insensitive name match or raw phone substring match.
    pub fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase()) || self.phone.contains(term)
    }
}
