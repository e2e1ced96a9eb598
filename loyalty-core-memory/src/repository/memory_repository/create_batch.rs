use async_trait::async_trait;
use loyalty_core_db::repository::create_batch::CreateBatch;
use std::collections::HashSet;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{MemoryRepository, Storable};

impl<T: Storable> MemoryRepository<T> {
    pub(super) async fn create_batch_impl(
        repo: &MemoryRepository<T>,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        repo.latency.wait().await;

        {
            let mut stored = repo.items.write();
            let mut seen: HashSet<Uuid> = stored.iter().map(|item| item.get_id()).collect();
            for item in &items {
                if !seen.insert(item.get_id()) {
                    return Err(format!("{} {} already exists", repo.name, item.get_id()).into());
                }
            }
            // New items go first, keeping batch order
            stored.splice(0..0, items.iter().cloned());
        }

        tracing::debug!(repository = repo.name, count = items.len(), "created batch");
        Ok(items)
    }
}

#[async_trait]
impl<T: Storable> CreateBatch<T> for MemoryRepository<T> {
    async fn create_batch(&self, items: Vec<T>) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
