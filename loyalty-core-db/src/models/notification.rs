use chrono::NaiveDate;
use loyalty_core_api::domain::Audience;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationModel {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub sent_date: NaiveDate,
    pub target_tiers: Audience,
}

impl Identifiable for NotificationModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
