use loyalty_core_db::models::identifiable::Identifiable;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

use crate::latency::SimulatedLatency;

/// Bounds every entity kept in a [`MemoryRepository`] must satisfy.
pub trait Storable: Identifiable + Clone + Serialize + Send + Sync + 'static {}

impl<T> Storable for T where T: Identifiable + Clone + Serialize + Send + Sync + 'static {}

/// Ordered in-memory collection implementing the repository traits.
///
/// Stored order is the order screens list items in. Every operation first
/// waits out the simulated latency, then takes the lock for a purely
/// synchronous section; the lock is never held across an await.
pub struct MemoryRepository<T> {
    pub(crate) name: &'static str,
    pub(crate) items: Arc<RwLock<Vec<T>>>,
    pub(crate) latency: SimulatedLatency,
}

impl<T: Storable> MemoryRepository<T> {
    pub fn new(name: &'static str, latency: SimulatedLatency) -> Self {
        Self::with_items(name, latency, Vec::new())
    }

    pub fn with_items(name: &'static str, latency: SimulatedLatency, items: Vec<T>) -> Self {
        Self {
            name,
            items: Arc::new(RwLock::new(items)),
            latency,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn latency(&self) -> SimulatedLatency {
        self.latency
    }

    /// Current item count, without simulated latency.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Copy of the collection, without simulated latency.
    pub(crate) fn snapshot(&self) -> Vec<T> {
        self.items.read().clone()
    }
}
