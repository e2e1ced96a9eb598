use loyalty_core_api::domain::{Language, Page, Role, Theme};
use loyalty_core_api::error::{ApiError, ApiResult};
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

use crate::preferences::{initial_theme, save_theme, PreferenceStore};

/// Everything the console shell needs to decide what to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub page: Page,
    pub role: Option<Role>,
    /// Set only for member sessions.
    pub member_id: Option<Uuid>,
    pub language: Language,
    pub theme: Theme,
}

impl AppState {
    pub fn signed_out(theme: Theme) -> Self {
        Self {
            page: Page::Login,
            role: None,
            member_id: None,
            language: Language::default(),
            theme,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login { role: Role, member_id: Option<Uuid> },
    Logout,
    Navigate(Page),
    SetLanguage(Language),
    ToggleLanguage,
    SetTheme(Theme),
    ToggleTheme,
}

/// Computes the state after `action`. Rejected actions leave `state` as is.
pub fn reduce(state: &AppState, action: Action) -> ApiResult<AppState> {
    let mut next = state.clone();
    match action {
        Action::Login { role, member_id } => {
            next.member_id = match (role, member_id) {
                (Role::Member, None) => {
                    return Err(ApiError::ValidationError("member login needs a member id".to_string()))
                }
                (Role::Member, id) => id,
                (Role::Admin, _) => None,
            };
            next.role = Some(role);
            next.page = Page::home_for(role);
        }
        Action::Logout => {
            next.role = None;
            next.member_id = None;
            next.page = Page::Login;
        }
        Action::Navigate(page) => {
            if !page.is_visible_to(state.role) {
                return Err(ApiError::ValidationError(format!(
                    "page {page:?} is not available to {:?}",
                    state.role
                )));
            }
            next.page = page;
        }
        Action::SetLanguage(language) => next.language = language,
        Action::ToggleLanguage => next.language = state.language.toggled(),
        Action::SetTheme(theme) => next.theme = theme,
        Action::ToggleTheme => next.theme = state.theme.toggled(),
    }
    Ok(next)
}

/// Owns the current [`AppState`] and broadcasts every change.
///
/// `dispatch` replaces the state synchronously; subscribers observe it
/// through a `watch` channel.
pub struct AppStore {
    sender: watch::Sender<AppState>,
    preferences: Arc<dyn PreferenceStore>,
}

impl AppStore {
    pub fn new(preferences: Arc<dyn PreferenceStore>, system_theme: Option<Theme>) -> Self {
        let theme = initial_theme(preferences.as_ref(), system_theme);
        let (sender, _) = watch::channel(AppState::signed_out(theme));
        Self { sender, preferences }
    }

    pub fn state(&self) -> AppState {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.sender.subscribe()
    }

    /// Reduces `action` against the current state and publishes the result.
    ///
    /// The read and the write happen under the channel lock, so concurrent
    /// dispatches apply one after another.
    pub fn dispatch(&self, action: Action) -> ApiResult<AppState> {
        let mut outcome = None;
        self.sender.send_if_modified(|state| match reduce(state, action) {
            Ok(next) => {
                let theme_changed = next.theme != state.theme;
                *state = next.clone();
                outcome = Some(Ok((next, theme_changed)));
                true
            }
            Err(e) => {
                outcome = Some(Err(e));
                false
            }
        });

        let (next, theme_changed) = outcome
            .unwrap_or_else(|| Err(ApiError::InternalError("state update did not run".to_string())))
            .inspect_err(|e| {
                tracing::warn!(?action, error = %e, "action rejected");
            })?;

        if theme_changed {
            // The session keeps the new theme even if it cannot be stored
            if let Err(e) = save_theme(self.preferences.as_ref(), next.theme) {
                tracing::warn!(error = %e, "failed to persist theme");
            }
        }

        tracing::debug!(?action, page = ?next.page, "state updated");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{MemoryPreferenceStore, THEME_KEY};

    fn store() -> (AppStore, Arc<MemoryPreferenceStore>) {
        let prefs = Arc::new(MemoryPreferenceStore::new());
        (AppStore::new(prefs.clone(), None), prefs)
    }

    #[test]
    fn test_login_routes_by_role() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, _) = store();
        assert_eq!(store.state().page, Page::Login);

        let admin = store.dispatch(Action::Login { role: Role::Admin, member_id: Some(Uuid::new_v4()) })?;
        assert_eq!(admin.page, Page::Dashboard);
        assert_eq!(admin.member_id, None);

        let out = store.dispatch(Action::Logout)?;
        assert_eq!(out.page, Page::Login);
        assert_eq!(out.role, None);

        let id = Uuid::new_v4();
        let member = store.dispatch(Action::Login { role: Role::Member, member_id: Some(id) })?;
        assert_eq!(member.page, Page::MemberView);
        assert_eq!(member.member_id, Some(id));
        Ok(())
    }

    #[test]
    fn test_member_login_requires_id() {
        let (store, _) = store();
        assert!(store.dispatch(Action::Login { role: Role::Member, member_id: None }).is_err());
        assert_eq!(store.state().role, None);
    }

    #[test]
    fn test_disallowed_navigation_leaves_state_unchanged() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, _) = store();
        store.dispatch(Action::Login { role: Role::Member, member_id: Some(Uuid::new_v4()) })?;
        let before = store.state();

        let result = store.dispatch(Action::Navigate(Page::FinancialReports));
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
        assert_eq!(store.state(), before);

        assert!(store.dispatch(Action::Navigate(Page::Members)).is_err());
        store.dispatch(Action::Logout)?;
        assert!(store.dispatch(Action::Navigate(Page::Dashboard)).is_err());
        Ok(())
    }

    #[test]
    fn test_admin_navigation() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, _) = store();
        store.dispatch(Action::Login { role: Role::Admin, member_id: None })?;
        assert_eq!(store.dispatch(Action::Navigate(Page::TierRules))?.page, Page::TierRules);
        assert!(store.dispatch(Action::Navigate(Page::MemberView)).is_err());
        Ok(())
    }

    #[test]
    fn test_theme_changes_are_persisted() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, prefs) = store();
        assert_eq!(store.state().theme, Theme::Light);

        store.dispatch(Action::ToggleTheme)?;
        assert_eq!(prefs.get(THEME_KEY)?.as_deref(), Some("dark"));

        store.dispatch(Action::SetTheme(Theme::Light))?;
        assert_eq!(prefs.get(THEME_KEY)?.as_deref(), Some("light"));

        let reopened = AppStore::new(prefs, Some(Theme::Dark));
        assert_eq!(reopened.state().theme, Theme::Light);
        Ok(())
    }

    #[test]
    fn test_language_actions() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, _) = store();
        assert_eq!(store.dispatch(Action::ToggleLanguage)?.language, Language::My);
        assert_eq!(store.dispatch(Action::SetLanguage(Language::En))?.language, Language::En);
        Ok(())
    }

    #[test]
    fn test_concurrent_dispatches_are_not_lost() {
        let (store, _) = store();
        let threads = 4;
        let toggles_per_thread = 2_000;

        std::thread::scope(|scope| {
            for _ in 0..threads {
                scope.spawn(|| {
                    for _ in 0..toggles_per_thread {
                        store.dispatch(Action::ToggleTheme).unwrap();
                        store.dispatch(Action::ToggleLanguage).unwrap();
                    }
                });
            }
        });

        // An even number of toggles lands back on the starting values
        assert_eq!(store.state().theme, Theme::Light);
        assert_eq!(store.state().language, Language::default());
    }

    #[test]
    fn test_odd_concurrent_toggles_flip_once() {
        let (store, prefs) = store();

        std::thread::scope(|scope| {
            for toggles in [1_001, 1_000] {
                let store = &store;
                scope.spawn(move || {
                    for _ in 0..toggles {
                        store.dispatch(Action::ToggleTheme).unwrap();
                    }
                });
            }
        });

        assert_eq!(store.state().theme, Theme::Dark);
        assert!(prefs.get(THEME_KEY).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_subscribers_see_dispatched_state() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, _) = store();
        let mut rx = store.subscribe();

        store.dispatch(Action::Login { role: Role::Admin, member_id: None })?;
        rx.changed().await?;
        assert_eq!(rx.borrow_and_update().page, Page::Dashboard);
        Ok(())
    }
}
