//! Explicit tier reclassification.
//!
//! Editing tier rules never touches member tiers. This pass is the only place
//! the two meet: it proposes changes, and nothing happens until they are
//! applied through the member repository.

use loyalty_core_api::domain::{SpendThreshold, Tier};
use loyalty_core_api::error::{ApiError, ApiResult};
use loyalty_core_db::models::member::MemberModel;
use loyalty_core_db::models::tier_rule::TierRuleBook;
use loyalty_core_db::repository::load_batch::LoadBatch;
use loyalty_core_db::repository::update_batch::UpdateBatch;
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierChange {
    pub member_id: Uuid,
    pub from: Tier,
    pub to: Tier,
}

impl TierChange {
    pub fn is_promotion(&self) -> bool {
        self.to > self.from
    }
}

fn reached(spend: Decimal, threshold: SpendThreshold) -> bool {
    threshold.amount().is_some_and(|amount| spend >= amount)
}

/// Tier a member's spend qualifies for: climb from the lowest tier while
/// either the retail or the wholesale threshold of the current tier is met.
/// A tier without a rule stops the climb.
pub fn qualifying_tier(member: &MemberModel, rules: &TierRuleBook) -> Tier {
    let mut tier = Tier::Normal;
    while let (Some(rule), Some(next)) = (rules.get(tier), tier.next()) {
        if reached(member.retail_spend, rule.next_retail) || reached(member.wholesale_spend, rule.next_wholesale) {
            tier = next;
        } else {
            break;
        }
    }
    tier
}

/// Proposed changes for every member whose assigned tier differs from the
/// qualifying one, promotions and demotions alike. Input order is kept.
pub fn reclassify(members: &[MemberModel], rules: &TierRuleBook) -> Vec<TierChange> {
    members
        .iter()
        .filter_map(|m| {
            let to = qualifying_tier(m, rules);
            (to != m.tier).then_some(TierChange {
                member_id: m.id,
                from: m.tier,
                to,
            })
        })
        .collect()
}

/// Writes `changes` through `repository`, returning the updated members.
///
/// Members are re-read from `repository` first. Every change must name a
/// stored member still holding the `from` tier; otherwise nothing is written.
pub async fn apply_tier_changes<R>(repository: &R, changes: &[TierChange]) -> ApiResult<Vec<MemberModel>>
where
    R: LoadBatch<MemberModel> + UpdateBatch<MemberModel> + ?Sized,
{
    if changes.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<Uuid> = changes.iter().map(|c| c.member_id).collect();
    let stored = repository.load_batch(&ids).await?;

    let mut updated = Vec::with_capacity(changes.len());
    for (change, member) in changes.iter().zip(stored) {
        let mut member = member.ok_or_else(|| ApiError::NotFound(format!("member {}", change.member_id)))?;
        if member.tier != change.from {
            return Err(ApiError::ValidationError(format!(
                "member {} is {}, not {}",
                member.code, member.tier, change.from
            )));
        }
        member.tier = change.to;
        updated.push(member);
    }

    let saved = repository.update_batch(updated).await?;
    tracing::info!(
        proposed = changes.len(),
        saved = saved.len(),
        "applied tier reclassification"
    );
    Ok(saved)
}
