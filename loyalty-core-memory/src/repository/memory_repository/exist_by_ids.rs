use async_trait::async_trait;
use loyalty_core_db::repository::exist_by_ids::ExistByIds;
use std::collections::HashSet;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{MemoryRepository, Storable};

impl<T: Storable> MemoryRepository<T> {
    pub(super) async fn exist_by_ids_impl(
        repo: &MemoryRepository<T>,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, bool)>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        repo.latency.wait().await;

        let known: HashSet<Uuid> = repo.items.read().iter().map(|item| item.get_id()).collect();
        Ok(ids.iter().map(|id| (*id, known.contains(id))).collect())
    }
}

#[async_trait]
impl<T: Storable> ExistByIds for MemoryRepository<T> {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> Result<Vec<(Uuid, bool)>, Box<dyn Error + Send + Sync>> {
        Self::exist_by_ids_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use loyalty_core_db::repository::create_batch::CreateBatch;
    use loyalty_core_db::repository::exist_by_ids::ExistByIds;
    use uuid::Uuid;
    use super::super::test_utils::test_utils::{create_test_repository, create_test_reward};

    #[tokio::test]
    async fn test_exist_by_ids() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = create_test_repository();
        let saved = repo.create_batch(vec![create_test_reward("present", 100)]).await?;
        let missing = Uuid::new_v4();

        let result = repo.exist_by_ids(&[saved[0].id, missing]).await?;
        assert_eq!(result, vec![(saved[0].id, true), (missing, false)]);

        Ok(())
    }
}
