use loyalty_core_api::domain::{tier_progress, Tier, TierProgress};
use loyalty_core_api::error::{ApiError, ApiResult};
use loyalty_core_db::models::member::MemberModel;
use loyalty_core_db::models::tier_rule::TierRuleBook;
use loyalty_core_db::repository::data_source::LoyaltyDataSource;
use rust_decimal::Decimal;
use uuid::Uuid;

/// The member's own landing screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberProfile {
    pub member: MemberModel,
    pub tier_hex: String,
    pub tier_color_class: String,
    /// `None` at the top tier.
    pub next_tier: Option<Tier>,
    pub progress: TierProgress,
    pub benefits: Vec<String>,
    pub show_birthday_greeting: bool,
}

impl MemberProfile {
    /// Retail spend still needed for the next tier, zero at the top.
    pub fn remaining_spend(&self) -> Decimal {
        self.progress.remaining()
    }
}

/// Progress is measured on retail spend against the member's current tier
/// rule. The assigned tier is shown as is.
pub fn member_profile(member: MemberModel, rules: &TierRuleBook) -> ApiResult<MemberProfile> {
    let rule = rules
        .get(member.tier)
        .ok_or_else(|| ApiError::NotFound(format!("tier rule for {}", member.tier)))?;

    Ok(MemberProfile {
        tier_hex: rule.hex.to_string(),
        tier_color_class: rule.color_class.to_string(),
        next_tier: member.tier.next(),
        progress: tier_progress(member.retail_spend, rule.next_retail),
        benefits: rule.benefits.clone(),
        show_birthday_greeting: member.is_birthday,
        member,
    })
}

/// Fetches the member and the tier rules, `Ok(None)` for an unknown id.
pub async fn load_member_profile(source: &dyn LoyaltyDataSource, id: Uuid) -> ApiResult<Option<MemberProfile>> {
    let Some(member) = source.member_by_id(id).await? else {
        return Ok(None);
    };
    let rules = TierRuleBook::from_rules(source.tier_rules().await?);
    member_profile(member, &rules).map(Some)
}
