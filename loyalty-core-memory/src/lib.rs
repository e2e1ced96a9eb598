pub mod data_service;
pub mod fixtures;
pub mod latency;
pub mod memory_repositories;
pub mod repository;

pub use data_service::MockDataService;
pub use latency::SimulatedLatency;
pub use memory_repositories::MemoryRepositories;
pub use repository::memory_repository::MemoryRepository;

#[cfg(test)]
pub mod test_helper;
