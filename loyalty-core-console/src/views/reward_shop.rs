use chrono::{DateTime, Utc};
use loyalty_core_api::error::{ApiError, ApiResult};
use loyalty_core_db::models::member::MemberModel;
use loyalty_core_db::models::reward::RewardModel;

use crate::ticket::{QrEncoder, RedemptionTicket};

#[derive(Debug, Clone, PartialEq)]
pub struct RewardOffer {
    pub reward: RewardModel,
    pub redeemable: bool,
    /// Points still missing, zero when redeemable.
    pub points_short: i64,
}

/// A granted redemption: the ticket and its encoded QR payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Redemption {
    pub ticket: RedemptionTicket,
    pub qr_payload: String,
}

/// Every reward, flagged redeemable when the member's balance covers its
/// cost. Stock plays no part.
pub fn reward_shop(member: &MemberModel, rewards: &[RewardModel]) -> Vec<RewardOffer> {
    rewards
        .iter()
        .map(|reward| RewardOffer {
            reward: reward.clone(),
            redeemable: member.points >= reward.points_cost,
            points_short: reward.points_cost.saturating_sub(member.points).max(0),
        })
        .collect()
}

/// Issues a redemption ticket. Neither the member's points nor the reward's
/// stock change.
pub fn redeem(
    member: &MemberModel,
    reward: &RewardModel,
    encoder: &dyn QrEncoder,
    at: DateTime<Utc>,
) -> ApiResult<Redemption> {
    if member.points < reward.points_cost {
        tracing::warn!(member = %member.code, reward = %reward.name, "insufficient points for redemption");
        return Err(ApiError::ValidationError(format!(
            "{} needs {} points, has {}",
            reward.name, reward.points_cost, member.points
        )));
    }

    let ticket = RedemptionTicket::new(member, reward, at);
    let qr_payload = encoder.encode(&ticket)?;
    tracing::info!(member = %member.code, reward = %reward.name, "redemption ticket issued");
    Ok(Redemption { ticket, qr_payload })
}
