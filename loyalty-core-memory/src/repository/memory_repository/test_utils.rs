#[cfg(test)]
pub mod test_utils {
    use loyalty_core_db::models::reward::{RewardModel, RewardType};
    use uuid::Uuid;

    use crate::latency::SimulatedLatency;
    use crate::repository::memory_repository::MemoryRepository;

    pub fn create_test_reward(name: &str, points_cost: i64) -> RewardModel {
        RewardModel {
            id: Uuid::new_v4(),
            name: name.to_string(),
            reward_type: RewardType::Voucher,
            points_cost,
            image_url: format!("https://picsum.photos/seed/{name}/400/300"),
            stock: 10,
        }
    }

    pub fn create_test_repository() -> MemoryRepository<RewardModel> {
        MemoryRepository::new("reward", SimulatedLatency::none())
    }
}
