use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use loyalty_core_api::error::{ApiError, ApiResult};
use loyalty_core_db::models::member::MemberModel;
use loyalty_core_db::models::reward::RewardModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a member shows at the counter to claim a reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionTicket {
    pub member_id: Uuid,
    pub reward_id: Uuid,
    pub name: String,
    pub reward_name: String,
    pub timestamp: DateTime<Utc>,
}

impl RedemptionTicket {
    pub fn new(member: &MemberModel, reward: &RewardModel, timestamp: DateTime<Utc>) -> Self {
        Self {
            member_id: member.id,
            reward_id: reward.id,
            name: member.name.clone(),
            reward_name: reward.name.clone(),
            timestamp,
        }
    }

    pub fn to_json(&self) -> ApiResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Turns a ticket into something a QR renderer can embed.
pub trait QrEncoder: Send + Sync {
    fn encode(&self, ticket: &RedemptionTicket) -> ApiResult<String>;
}

/// Encodes the ticket JSON as a `data:application/json;base64,` URI.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUriEncoder;

impl DataUriEncoder {
    pub const PREFIX: &'static str = "data:application/json;base64,";

    /// Reverses [`QrEncoder::encode`].
    pub fn decode(&self, uri: &str) -> ApiResult<RedemptionTicket> {
        let payload = uri
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| ApiError::EncodingError("not a JSON data URI".to_string()))?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| ApiError::EncodingError(format!("invalid base64 payload: {e}")))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl QrEncoder for DataUriEncoder {
    fn encode(&self, ticket: &RedemptionTicket) -> ApiResult<String> {
        let json = ticket.to_json()?;
        Ok(format!("{}{}", Self::PREFIX, STANDARD.encode(json)))
    }
}
