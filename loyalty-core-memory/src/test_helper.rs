use crate::data_service::MockDataService;
use crate::latency::SimulatedLatency;
use crate::memory_repositories::MemoryRepositories;

pub struct TestContext {
    pub service: MockDataService,
}

impl TestContext {
    pub fn repos(&self) -> &MemoryRepositories {
        self.service.repositories()
    }
}

/// Fixture-seeded service with no simulated latency.
pub fn setup_test_context() -> TestContext {
    TestContext {
        service: MockDataService::seeded(SimulatedLatency::none()),
    }
}
