use async_trait::async_trait;
use loyalty_core_db::models::{
    ContentUsageModel, DashboardModel, EventModel, MemberModel, NotificationModel, ProductModel,
    PromotionModel, RewardModel, TierRuleModel, TransactionModel,
};
use loyalty_core_db::repository::data_source::LoyaltyDataSource;
use loyalty_core_db::repository::load::Load;
use loyalty_core_db::repository::load_all::LoadAll;
use std::error::Error;
use uuid::Uuid;

use crate::latency::SimulatedLatency;
use crate::memory_repositories::MemoryRepositories;

/// [`LoyaltyDataSource`] answering from the in-memory repositories after the
/// configured latency.
#[derive(Clone)]
pub struct MockDataService {
    repos: MemoryRepositories,
}

impl MockDataService {
    pub fn new(repos: MemoryRepositories) -> Self {
        Self { repos }
    }

    /// Fixture-backed service with the given latency.
    pub fn seeded(latency: SimulatedLatency) -> Self {
        Self::new(MemoryRepositories::seeded(latency))
    }

    /// Writable handles onto the same collections this service reads.
    pub fn repositories(&self) -> &MemoryRepositories {
        &self.repos
    }
}

#[async_trait]
impl LoyaltyDataSource for MockDataService {
    async fn members(&self) -> Result<Vec<MemberModel>, Box<dyn Error + Send + Sync>> {
        tracing::debug!("fetching members");
        self.repos.members.load_all().await
    }

    async fn member_by_id(&self, id: Uuid) -> Result<Option<MemberModel>, Box<dyn Error + Send + Sync>> {
        let member = self.repos.members.load(id).await?;
        tracing::debug!(member_id = %id, found = member.is_some(), "fetched member");
        Ok(member)
    }

    async fn rewards(&self) -> Result<Vec<RewardModel>, Box<dyn Error + Send + Sync>> {
        self.repos.rewards.load_all().await
    }

    async fn dashboard(&self) -> Result<DashboardModel, Box<dyn Error + Send + Sync>> {
        self.repos.latency.wait().await;
        Ok(self.repos.dashboard.read().clone())
    }

    async fn promotions(&self) -> Result<Vec<PromotionModel>, Box<dyn Error + Send + Sync>> {
        self.repos.promotions.load_all().await
    }

    async fn events(&self) -> Result<Vec<EventModel>, Box<dyn Error + Send + Sync>> {
        self.repos.events.load_all().await
    }

    async fn tier_rules(&self) -> Result<Vec<TierRuleModel>, Box<dyn Error + Send + Sync>> {
        let mut rules = self.repos.tier_rules.load_all().await?;
        rules.sort_by_key(|rule| rule.tier);
        Ok(rules)
    }

    async fn notifications(&self) -> Result<Vec<NotificationModel>, Box<dyn Error + Send + Sync>> {
        self.repos.notifications.load_all().await
    }

    async fn products(&self) -> Result<Vec<ProductModel>, Box<dyn Error + Send + Sync>> {
        self.repos.products.load_all().await
    }

    async fn transactions(&self) -> Result<Vec<TransactionModel>, Box<dyn Error + Send + Sync>> {
        tracing::debug!("fetching transactions");
        self.repos.transactions.load_all().await
    }

    async fn content_usage(&self) -> Result<Vec<ContentUsageModel>, Box<dyn Error + Send + Sync>> {
        self.repos.content_usage.load_all().await
    }
}
