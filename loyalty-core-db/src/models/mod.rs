pub mod identifiable;
pub mod member;
pub mod tier_rule;
pub mod reward;
pub mod promotion;
pub mod event;
pub mod notification;
pub mod transaction;
pub mod product;
pub mod content_usage;
pub mod dashboard;

// Re-exports
pub use identifiable::*;
pub use member::*;
pub use tier_rule::*;
pub use reward::*;
pub use promotion::*;
pub use event::*;
pub use notification::*;
pub use transaction::*;
pub use product::*;
pub use content_usage::*;
pub use dashboard::*;
