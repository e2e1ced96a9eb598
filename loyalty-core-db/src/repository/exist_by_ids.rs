use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for checking which entities exist
///
/// Returns one `(id, exists)` pair per requested id, in request order.
#[async_trait]
pub trait ExistByIds: Send + Sync {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> Result<Vec<(Uuid, bool)>, Box<dyn std::error::Error + Send + Sync>>;
}
