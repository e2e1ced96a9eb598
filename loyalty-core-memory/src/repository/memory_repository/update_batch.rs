use async_trait::async_trait;
use loyalty_core_db::repository::update_batch::UpdateBatch;
use loyalty_core_db::utils::hash_as_i64;
use std::collections::HashSet;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{MemoryRepository, Storable};

impl<T: Storable> MemoryRepository<T> {
    pub(super) async fn update_batch_impl(
        repo: &MemoryRepository<T>,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        repo.latency.wait().await;

        let mut changed = Vec::new();
        {
            let mut stored = repo.items.write();

            // Resolve every position before writing so a miss leaves the store untouched
            let mut seen: HashSet<Uuid> = HashSet::with_capacity(items.len());
            let mut positions = Vec::with_capacity(items.len());
            for item in &items {
                if !seen.insert(item.get_id()) {
                    return Err(format!("{} {} appears twice in batch", repo.name, item.get_id()).into());
                }
                let position = stored
                    .iter()
                    .position(|existing| existing.get_id() == item.get_id())
                    .ok_or_else(|| format!("{} {} not found", repo.name, item.get_id()))?;
                positions.push(position);
            }

            for (position, item) in positions.into_iter().zip(items) {
                if hash_as_i64(&stored[position])? == hash_as_i64(&item)? {
                    continue;
                }
                stored[position] = item.clone();
                changed.push(item);
            }
        }

        tracing::debug!(repository = repo.name, changed = changed.len(), "updated batch");
        Ok(changed)
    }
}

#[async_trait]
impl<T: Storable> UpdateBatch<T> for MemoryRepository<T> {
    async fn update_batch(&self, items: Vec<T>) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}
