pub mod tier;
pub mod progress;
pub mod audience;
pub mod date_range;
pub mod session;

pub use tier::Tier;
pub use progress::{tier_progress, SpendThreshold, TierProgress};
pub use audience::Audience;
pub use date_range::{DateRange, EmptyBoundPolicy};
pub use session::{Language, Page, Role, Theme};
