pub mod config;
pub mod export;
pub mod logging;
pub mod preferences;
pub mod reclassify;
pub mod reports;
pub mod store;
pub mod ticket;
pub mod views;

pub use config::ConsoleConfig;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use store::{Action, AppState, AppStore};
pub use ticket::{DataUriEncoder, QrEncoder, RedemptionTicket};

#[cfg(test)]
pub mod test_helper;
