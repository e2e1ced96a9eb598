use async_trait::async_trait;
use loyalty_core_db::repository::delete_batch::DeleteBatch;
use std::collections::HashSet;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{MemoryRepository, Storable};

impl<T: Storable> MemoryRepository<T> {
    pub(super) async fn delete_batch_impl(
        repo: &MemoryRepository<T>,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }
        repo.latency.wait().await;

        let wanted: HashSet<&Uuid> = ids.iter().collect();
        let deleted = {
            let mut stored = repo.items.write();
            let before = stored.len();
            stored.retain(|item| !wanted.contains(&item.get_id()));
            before - stored.len()
        };

        tracing::debug!(repository = repo.name, deleted, "deleted batch");
        Ok(deleted)
    }
}

#[async_trait]
impl<T: Storable> DeleteBatch for MemoryRepository<T> {
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use loyalty_core_db::repository::create_batch::CreateBatch;
    use loyalty_core_db::repository::delete_batch::DeleteBatch;
    use uuid::Uuid;
    use super::super::test_utils::test_utils::{create_test_repository, create_test_reward};

    #[tokio::test]
    async fn test_delete_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = create_test_repository();
        let mut rewards = Vec::new();
        for i in 0..5 {
            rewards.push(create_test_reward(&format!("reward-{i}"), i * 100));
        }
        let saved = repo.create_batch(rewards).await?;
        let ids: Vec<Uuid> = saved.iter().take(3).map(|r| r.id).collect();

        let deleted = repo.delete_batch(&ids).await?;
        assert_eq!(deleted, 3);
        assert_eq!(repo.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_batch_with_non_existing_ids() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = create_test_repository();
        repo.create_batch(vec![create_test_reward("keep", 100)]).await?;

        let deleted = repo.delete_batch(&[Uuid::new_v4(), Uuid::new_v4()]).await?;
        assert_eq!(deleted, 0);
        assert_eq!(repo.len(), 1);

        Ok(())
    }
}
