use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    ContentUsageModel, DashboardModel, EventModel, MemberModel, NotificationModel,
    ProductModel, PromotionModel, RewardModel, TierRuleModel, TransactionModel,
};

/// Read boundary every console screen fetches through
///
/// One accessor per collection. Each call resolves to a full snapshot; the
/// single lookup resolves to `None` on a miss. An implementation may sit on
/// memory fixtures or on a remote API, screens only rely on this contract.
#[async_trait]
pub trait LoyaltyDataSource: Send + Sync {
    async fn members(&self) -> Result<Vec<MemberModel>, Box<dyn std::error::Error + Send + Sync>>;

    async fn member_by_id(&self, id: Uuid) -> Result<Option<MemberModel>, Box<dyn std::error::Error + Send + Sync>>;

    async fn rewards(&self) -> Result<Vec<RewardModel>, Box<dyn std::error::Error + Send + Sync>>;

    async fn dashboard(&self) -> Result<DashboardModel, Box<dyn std::error::Error + Send + Sync>>;

    async fn promotions(&self) -> Result<Vec<PromotionModel>, Box<dyn std::error::Error + Send + Sync>>;

    async fn events(&self) -> Result<Vec<EventModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Rules ordered lowest tier first
    async fn tier_rules(&self) -> Result<Vec<TierRuleModel>, Box<dyn std::error::Error + Send + Sync>>;

    async fn notifications(&self) -> Result<Vec<NotificationModel>, Box<dyn std::error::Error + Send + Sync>>;

    async fn products(&self) -> Result<Vec<ProductModel>, Box<dyn std::error::Error + Send + Sync>>;

    async fn transactions(&self) -> Result<Vec<TransactionModel>, Box<dyn std::error::Error + Send + Sync>>;

    async fn content_usage(&self) -> Result<Vec<ContentUsageModel>, Box<dyn std::error::Error + Send + Sync>>;
}
