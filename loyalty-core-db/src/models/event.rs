use chrono::NaiveDate;
use loyalty_core_api::domain::Tier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Member event. Unlike notifications, the target set is a plain selection
/// and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventModel {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub target_tiers: BTreeSet<Tier>,
}

impl Identifiable for EventModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
