use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

/// Console screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Login,
    Dashboard,
    Members,
    Rewards,
    MemberView,
    Promotions,
    Analytics,
    Events,
    TierRules,
    Notifications,
    EcommerceAdmin,
    MemberReports,
    FinancialReports,
    EngagementReports,
}

impl Page {
    /// Landing page after login.
    pub fn home_for(role: Role) -> Page {
        match role {
            Role::Admin => Page::Dashboard,
            Role::Member => Page::MemberView,
        }
    }

    /// Whether a session with `role` (or none) may open this page.
    pub fn is_visible_to(self, role: Option<Role>) -> bool {
        match (self, role) {
            (Page::Login, _) => true,
            (_, None) => false,
            (Page::MemberView, Some(role)) => role == Role::Member,
            (_, Some(role)) => role == Role::Admin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    My,
}

impl Language {
    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::My,
            Language::My => Language::En,
        }
    }
}
