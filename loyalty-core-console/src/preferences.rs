use loyalty_core_api::domain::Theme;
use loyalty_core_api::error::{ApiError, ApiResult};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const THEME_KEY: &str = "theme";

/// String key/value storage that outlives a session.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> ApiResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> ApiResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> ApiResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as one flat JSON object on disk.
///
/// The file is read on every `get` and rewritten on every `set`. A missing
/// file reads as empty.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> ApiResult<BTreeMap<String, String>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ApiError::PreferenceError(format!("{} is not a preference file: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(ApiError::PreferenceError(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> ApiResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        let _guard = self.write_lock.lock();
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        let json = serde_json::to_vec_pretty(&values)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| ApiError::PreferenceError(format!("failed to create {}: {e}", parent.display())))?;
        }
        std::fs::write(&self.path, json)
            .map_err(|e| ApiError::PreferenceError(format!("failed to write {}: {e}", self.path.display())))
    }
}

/// Theme to start with: a valid stored value, else the system preference,
/// else light. Unreadable storage counts as nothing stored.
pub fn initial_theme(store: &dyn PreferenceStore, system: Option<Theme>) -> Theme {
    let stored = match store.get(THEME_KEY) {
        Ok(value) => value.and_then(|v| v.parse::<Theme>().ok()),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable theme preference");
            None
        }
    };
    stored.or(system).unwrap_or_default()
}

pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) -> ApiResult<()> {
    store.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initial_theme_precedence() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = MemoryPreferenceStore::new();
        assert_eq!(initial_theme(&store, None), Theme::Light);
        assert_eq!(initial_theme(&store, Some(Theme::Dark)), Theme::Dark);

        store.set(THEME_KEY, "purple")?;
        assert_eq!(initial_theme(&store, Some(Theme::Dark)), Theme::Dark);

        save_theme(&store, Theme::Light)?;
        assert_eq!(initial_theme(&store, Some(Theme::Dark)), Theme::Light);
        Ok(())
    }

    #[test]
    fn test_file_store_round_trip() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("prefs.json");

        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.get(THEME_KEY)?, None);

        save_theme(&store, Theme::Dark)?;
        store.set("language", "my")?;

        let reopened = FilePreferenceStore::new(&path);
        assert_eq!(initial_theme(&reopened, None), Theme::Dark);
        assert_eq!(reopened.get("language")?.as_deref(), Some("my"));
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_reported_and_ignored_for_theme() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json")?;

        let store = FilePreferenceStore::new(&path);
        assert!(matches!(store.get(THEME_KEY), Err(ApiError::PreferenceError(_))));
        assert_eq!(initial_theme(&store, Some(Theme::Dark)), Theme::Dark);
        Ok(())
    }
}
