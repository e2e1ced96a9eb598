use async_trait::async_trait;
use loyalty_core_db::repository::load_batch::LoadBatch;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{MemoryRepository, Storable};

impl<T: Storable> MemoryRepository<T> {
    pub(super) async fn load_batch_impl(
        repo: &MemoryRepository<T>,
        ids: &[Uuid],
    ) -> Result<Vec<Option<T>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        repo.latency.wait().await;

        let stored = repo.items.read();
        let by_id: HashMap<Uuid, &T> = stored.iter().map(|item| (item.get_id(), item)).collect();
        Ok(ids.iter().map(|id| by_id.get(id).map(|item| (*item).clone())).collect())
    }
}

#[async_trait]
impl<T: Storable> LoadBatch<T> for MemoryRepository<T> {
    async fn load_batch(&self, ids: &[Uuid]) -> Result<Vec<Option<T>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use loyalty_core_db::repository::create_batch::CreateBatch;
    use loyalty_core_db::repository::load_batch::LoadBatch;
    use uuid::Uuid;
    use super::super::test_utils::test_utils::{create_test_repository, create_test_reward};

    #[tokio::test]
    async fn test_load_batch_keeps_request_order() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = create_test_repository();
        let saved = repo
            .create_batch(vec![create_test_reward("a", 1), create_test_reward("b", 2)])
            .await?;

        let missing = Uuid::new_v4();
        let loaded = repo.load_batch(&[saved[1].id, missing, saved[0].id]).await?;
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].as_ref().map(|r| r.name.as_str()), Some("b"));
        assert!(loaded[1].is_none());
        assert_eq!(loaded[2].as_ref().map(|r| r.name.as_str()), Some("a"));

        Ok(())
    }
}
