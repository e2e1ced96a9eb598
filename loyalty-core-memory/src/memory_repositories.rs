use loyalty_core_db::models::{
    ContentUsageModel, DashboardModel, EventModel, MemberModel, NotificationModel, ProductModel,
    PromotionModel, RewardModel, TierRuleModel, TransactionModel,
};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::fixtures;
use crate::latency::SimulatedLatency;
use crate::repository::memory_repository::MemoryRepository;

/// One repository per collection, sharing a single simulated latency.
///
/// Cloning is cheap and every clone sees the same data.
#[derive(Clone)]
pub struct MemoryRepositories {
    pub latency: SimulatedLatency,
    pub members: Arc<MemoryRepository<MemberModel>>,
    pub rewards: Arc<MemoryRepository<RewardModel>>,
    pub promotions: Arc<MemoryRepository<PromotionModel>>,
    pub events: Arc<MemoryRepository<EventModel>>,
    pub tier_rules: Arc<MemoryRepository<TierRuleModel>>,
    pub notifications: Arc<MemoryRepository<NotificationModel>>,
    pub products: Arc<MemoryRepository<ProductModel>>,
    pub transactions: Arc<MemoryRepository<TransactionModel>>,
    pub content_usage: Arc<MemoryRepository<ContentUsageModel>>,
    pub dashboard: Arc<RwLock<DashboardModel>>,
}

impl MemoryRepositories {
    /// Empty collections and a zeroed dashboard.
    pub fn empty(latency: SimulatedLatency) -> Self {
        Self {
            latency,
            members: Arc::new(MemoryRepository::new("member", latency)),
            rewards: Arc::new(MemoryRepository::new("reward", latency)),
            promotions: Arc::new(MemoryRepository::new("promotion", latency)),
            events: Arc::new(MemoryRepository::new("event", latency)),
            tier_rules: Arc::new(MemoryRepository::new("tier_rule", latency)),
            notifications: Arc::new(MemoryRepository::new("notification", latency)),
            products: Arc::new(MemoryRepository::new("product", latency)),
            transactions: Arc::new(MemoryRepository::new("transaction", latency)),
            content_usage: Arc::new(MemoryRepository::new("content_usage", latency)),
            dashboard: Arc::new(RwLock::new(DashboardModel::default())),
        }
    }

    /// Collections loaded from the static fixtures.
    pub fn seeded(latency: SimulatedLatency) -> Self {
        let repos = Self {
            latency,
            members: Arc::new(MemoryRepository::with_items("member", latency, fixtures::members::members())),
            rewards: Arc::new(MemoryRepository::with_items("reward", latency, fixtures::rewards::rewards())),
            promotions: Arc::new(MemoryRepository::with_items(
                "promotion",
                latency,
                fixtures::promotions::promotions(),
            )),
            events: Arc::new(MemoryRepository::with_items("event", latency, fixtures::events::events())),
            tier_rules: Arc::new(MemoryRepository::with_items(
                "tier_rule",
                latency,
                fixtures::tier_rules::tier_rules(),
            )),
            notifications: Arc::new(MemoryRepository::with_items(
                "notification",
                latency,
                fixtures::notifications::notifications(),
            )),
            products: Arc::new(MemoryRepository::with_items("product", latency, fixtures::products::products())),
            transactions: Arc::new(MemoryRepository::with_items(
                "transaction",
                latency,
                fixtures::transactions::transactions(),
            )),
            content_usage: Arc::new(MemoryRepository::with_items(
                "content_usage",
                latency,
                fixtures::content_usage::content_usage(),
            )),
            dashboard: Arc::new(RwLock::new(fixtures::dashboard::dashboard())),
        };
        tracing::debug!(
            members = repos.members.len(),
            transactions = repos.transactions.len(),
            "seeded memory repositories"
        );
        repos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_and_empty() {
        let seeded = MemoryRepositories::seeded(SimulatedLatency::none());
        assert!(!seeded.members.is_empty());
        assert_eq!(seeded.tier_rules.len(), 4);
        assert!(seeded.dashboard.read().total_members > 0);

        let empty = MemoryRepositories::empty(SimulatedLatency::none());
        assert!(empty.members.is_empty());
        assert_eq!(empty.dashboard.read().total_members, 0);
    }

    #[test]
    fn test_clones_share_storage() {
        let repos = MemoryRepositories::seeded(SimulatedLatency::none());
        let other = repos.clone();
        assert!(Arc::ptr_eq(&repos.members, &other.members));
    }
}
