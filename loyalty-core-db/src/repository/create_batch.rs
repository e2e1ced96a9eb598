use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple entities in a batch
///
/// The batch is all-or-nothing: if any id already exists nothing is written.
/// New entities are placed at the front of the collection, in batch order,
/// so freshly created events and notifications list first.
#[async_trait]
pub trait CreateBatch<T: Identifiable>: Send + Sync {
    /// Save multiple items
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The created entities
    /// * `Err` - If an id is duplicated or the store could not be written
    async fn create_batch(&self, items: Vec<T>) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
