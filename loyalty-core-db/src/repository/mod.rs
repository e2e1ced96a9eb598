pub mod exist_by_ids;
pub mod load;
pub mod load_all;
pub mod load_batch;
pub mod create_batch;
pub mod update_batch;
pub mod delete_batch;
pub mod pagination;
pub mod data_source;

// Re-exports
pub use exist_by_ids::*;
pub use load::*;
pub use load_all::*;
pub use load_batch::*;
pub use create_batch::*;
pub use update_batch::*;
pub use delete_batch::*;
pub use pagination::*;
pub use data_source::*;
