use std::path::PathBuf;

use loyalty_core_memory::SimulatedLatency;

/// Console configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LOYALTY_LATENCY_MS | 500 | Simulated data-source latency |
/// | LOYALTY_PREFERENCES_PATH | ./loyalty-preferences.json | Theme preference file |
/// | LOYALTY_EXPORT_DIR | ./exports | Where the binary writes report files |
/// | LOYALTY_LOG_LEVEL | info | Default log filter when `RUST_LOG` is unset |
/// | LOYALTY_LOG_JSON | false | JSON log lines instead of pretty output |
/// | LOYALTY_TOP_ACTIVE_LIMIT | 20 | Rows in the top active members report |
/// | LOYALTY_EXPIRING_WINDOW_DAYS | 30 | Look-ahead of the expiring members report |
/// | LOYALTY_INACTIVE_AFTER_MONTHS | 6 | Months without a visit before a member is inactive |
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub latency_ms: u64,
    pub preferences_path: PathBuf,
    pub export_dir: PathBuf,
    pub log_level: String,
    pub log_json: bool,
    pub top_active_limit: usize,
    pub expiring_window_days: u32,
    pub inactive_after_months: u32,
}

impl ConsoleConfig {
    /// Loads configuration from the environment; unset or unparsable
    /// variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            latency_ms: parsed_var("LOYALTY_LATENCY_MS").unwrap_or(SimulatedLatency::DEFAULT_MILLIS),
            preferences_path: std::env::var("LOYALTY_PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./loyalty-preferences.json")),
            export_dir: std::env::var("LOYALTY_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./exports")),
            log_level: std::env::var("LOYALTY_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: parsed_var("LOYALTY_LOG_JSON").unwrap_or(false),
            top_active_limit: parsed_var("LOYALTY_TOP_ACTIVE_LIMIT").unwrap_or(20),
            expiring_window_days: parsed_var("LOYALTY_EXPIRING_WINDOW_DAYS").unwrap_or(30),
            inactive_after_months: parsed_var("LOYALTY_INACTIVE_AFTER_MONTHS").unwrap_or(6),
        }
    }

    pub fn latency(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.latency_ms)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
