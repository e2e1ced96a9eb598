use loyalty_core_api::domain::{SpendThreshold, Tier};
use loyalty_core_api::error::{ApiError, ApiResult};
use loyalty_core_db::models::tier_rule::{TierRuleBook, TierRuleModel};
use loyalty_core_db::repository::update_batch::UpdateBatch;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendChannel {
    Retail,
    Wholesale,
}

/// Working copy of the tier rules, saved back in one batch.
///
/// Editing here never changes any member's tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierRulesEditor {
    book: TierRuleBook,
}

impl TierRulesEditor {
    pub fn new(rules: Vec<TierRuleModel>) -> Self {
        Self {
            book: TierRuleBook::from_rules(rules),
        }
    }

    pub fn rules(&self) -> &TierRuleBook {
        &self.book
    }

    fn rule_mut(&mut self, tier: Tier) -> ApiResult<&mut TierRuleModel> {
        self.book
            .get_mut(tier)
            .ok_or_else(|| ApiError::NotFound(format!("tier rule for {tier}")))
    }

    /// Sets the spend needed to leave `tier`. The top tier has no next tier,
    /// so its thresholds stay unbounded.
    pub fn set_threshold(&mut self, tier: Tier, channel: SpendChannel, amount: Decimal) -> ApiResult<()> {
        if tier.is_top() {
            return Err(ApiError::ValidationError(format!("{tier} thresholds are fixed")));
        }
        if amount < Decimal::ZERO {
            return Err(ApiError::ValidationError(format!("threshold cannot be negative: {amount}")));
        }
        let rule = self.rule_mut(tier)?;
        let threshold = SpendThreshold::Finite(amount);
        match channel {
            SpendChannel::Retail => rule.next_retail = threshold,
            SpendChannel::Wholesale => rule.next_wholesale = threshold,
        }
        Ok(())
    }

    /// Appends an empty benefit line and returns its index.
    pub fn add_benefit(&mut self, tier: Tier) -> ApiResult<usize> {
        let rule = self.rule_mut(tier)?;
        rule.benefits.push(String::new());
        Ok(rule.benefits.len() - 1)
    }

    pub fn set_benefit(&mut self, tier: Tier, index: usize, text: impl Into<String>) -> ApiResult<()> {
        let rule = self.rule_mut(tier)?;
        let slot = rule
            .benefits
            .get_mut(index)
            .ok_or_else(|| ApiError::NotFound(format!("benefit {index} of {tier}")))?;
        *slot = text.into();
        Ok(())
    }

    pub fn remove_benefit(&mut self, tier: Tier, index: usize) -> ApiResult<String> {
        let rule = self.rule_mut(tier)?;
        if index >= rule.benefits.len() {
            return Err(ApiError::NotFound(format!("benefit {index} of {tier}")));
        }
        Ok(rule.benefits.remove(index))
    }

    /// Persists every rule; returns the ones that actually changed.
    pub async fn save<R>(&self, repository: &R) -> ApiResult<Vec<TierRuleModel>>
    where
        R: UpdateBatch<TierRuleModel> + ?Sized,
    {
        let rules: Vec<TierRuleModel> = self.book.iter().cloned().collect();
        let changed = repository.update_batch(rules).await?;
        tracing::info!(changed = changed.len(), "tier rules saved");
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loyalty_core_db::repository::load_all::LoadAll;
    use loyalty_core_memory::fixtures::tier_rules::tier_rules;
    use loyalty_core_memory::{MemoryRepository, SimulatedLatency};

    #[test]
    fn test_top_tier_thresholds_are_fixed() {
        let mut editor = TierRulesEditor::new(tier_rules());
        let result = editor.set_threshold(Tier::Diamond, SpendChannel::Retail, Decimal::ONE);
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
        assert!(editor.rules().get(Tier::Diamond).is_some_and(|r| r.next_retail.is_unbounded()));
    }

    #[test]
    fn test_threshold_edits() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut editor = TierRulesEditor::new(tier_rules());
        editor.set_threshold(Tier::Gold, SpendChannel::Wholesale, Decimal::from(300_000_000))?;

        let gold = editor.rules().get(Tier::Gold).ok_or("gold rule")?;
        assert_eq!(gold.next_wholesale, SpendThreshold::Finite(Decimal::from(300_000_000)));
        assert!(editor.set_threshold(Tier::Gold, SpendChannel::Retail, Decimal::from(-1)).is_err());
        Ok(())
    }

    #[test]
    fn test_benefit_editing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut editor = TierRulesEditor::new(tier_rules());
        let before = editor.rules().get(Tier::Normal).ok_or("normal rule")?.benefits.len();

        let index = editor.add_benefit(Tier::Normal)?;
        assert_eq!(index, before);
        editor.set_benefit(Tier::Normal, index, "Free parking")?;
        assert_eq!(editor.remove_benefit(Tier::Normal, 0)?, "1 point per 1,000 MMK spent");

        let benefits = &editor.rules().get(Tier::Normal).ok_or("normal rule")?.benefits;
        assert_eq!(benefits.last().map(String::as_str), Some("Free parking"));
        assert!(editor.remove_benefit(Tier::Normal, 99).is_err());
        assert!(editor.set_benefit(Tier::Normal, 99, "x").is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_save_writes_only_changed_rules() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = MemoryRepository::with_items("tier_rule", SimulatedLatency::none(), tier_rules());
        let mut editor = TierRulesEditor::new(repo.load_all().await?);

        assert!(editor.save(&repo).await?.is_empty());

        editor.set_threshold(Tier::Platinum, SpendChannel::Retail, Decimal::from(120_000_000))?;
        let changed = editor.save(&repo).await?;
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].tier, Tier::Platinum);

        let stored = repo.load_all().await?;
        let platinum = stored.iter().find(|r| r.tier == Tier::Platinum).ok_or("platinum rule")?;
        assert_eq!(platinum.next_retail, SpendThreshold::Finite(Decimal::from(120_000_000)));
        Ok(())
    }
}
