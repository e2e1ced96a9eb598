pub mod repo_impl;
pub mod create_batch;
pub mod delete_batch;
pub mod exist_by_ids;
pub mod load;
pub mod load_all;
pub mod load_batch;
pub mod update_batch;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::MemoryRepository;
