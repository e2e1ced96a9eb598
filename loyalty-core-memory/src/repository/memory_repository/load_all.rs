use async_trait::async_trait;
use loyalty_core_db::repository::load_all::LoadAll;
use loyalty_core_db::repository::pagination::{Page, PageRequest};
use std::error::Error;

use super::repo_impl::{MemoryRepository, Storable};

#[async_trait]
impl<T: Storable> LoadAll<T> for MemoryRepository<T> {
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        self.latency.wait().await;
        Ok(self.snapshot())
    }

    async fn load_page(&self, page: PageRequest) -> Result<Page<T>, Box<dyn Error + Send + Sync>> {
        self.latency.wait().await;
        let stored = self.items.read();
        Ok(Page::from_slice(&stored, page))
    }
}

#[cfg(test)]
mod tests {
    use loyalty_core_db::repository::create_batch::CreateBatch;
    use loyalty_core_db::repository::load_all::LoadAll;
    use loyalty_core_db::repository::pagination::PageRequest;
    use super::super::test_utils::test_utils::{create_test_repository, create_test_reward};

    #[tokio::test]
    async fn test_load_page() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = create_test_repository();
        let rewards = (0..5).map(|i| create_test_reward(&format!("r{i}"), i)).collect();
        repo.create_batch(rewards).await?;

        let page = repo.load_page(PageRequest::for_page(2, 3)).await?;
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "r4");
        assert_eq!(page.total, 5);
        assert!(!page.has_more());

        Ok(())
    }
}
