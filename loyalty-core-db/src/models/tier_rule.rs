use heapless::String as HeaplessString;
use loyalty_core_api::domain::{SpendThreshold, Tier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Per-tier configuration: colours, upgrade thresholds and benefits.
///
/// Thresholds are the spend needed to reach the *next* tier, so the top tier
/// carries `SpendThreshold::Unbounded` for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierRuleModel {
    pub id: Uuid,
    pub tier: Tier,
    pub color_class: HeaplessString<32>,
    pub hex: HeaplessString<7>,
    pub next_retail: SpendThreshold,
    pub next_wholesale: SpendThreshold,
    pub benefits: Vec<String>,
}

impl Identifiable for TierRuleModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Tier rules keyed by tier, iterated lowest tier first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TierRuleBook {
    rules: BTreeMap<Tier, TierRuleModel>,
}

impl TierRuleBook {
    /// Later rules for the same tier replace earlier ones.
    pub fn from_rules<I: IntoIterator<Item = TierRuleModel>>(rules: I) -> Self {
        Self {
            rules: rules.into_iter().map(|rule| (rule.tier, rule)).collect(),
        }
    }

    pub fn get(&self, tier: Tier) -> Option<&TierRuleModel> {
        self.rules.get(&tier)
    }

    pub fn get_mut(&mut self, tier: Tier) -> Option<&mut TierRuleModel> {
        self.rules.get_mut(&tier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierRuleModel> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn into_rules(self) -> Vec<TierRuleModel> {
        self.rules.into_values().collect()
    }
}
