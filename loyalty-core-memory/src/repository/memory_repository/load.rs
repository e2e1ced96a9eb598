use async_trait::async_trait;
use loyalty_core_db::repository::load::Load;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{MemoryRepository, Storable};

#[async_trait]
impl<T: Storable> Load<T> for MemoryRepository<T> {
    async fn load(&self, id: Uuid) -> Result<Option<T>, Box<dyn Error + Send + Sync>> {
        self.latency.wait().await;
        let found = self.items.read().iter().find(|item| item.get_id() == id).cloned();
        if found.is_none() {
            tracing::debug!(repository = self.name, %id, "lookup miss");
        }
        Ok(found)
    }
}
