use chrono::{DateTime, Utc};
use loyalty_core_api::domain::Tier;
use loyalty_core_db::models::content_usage::{ContentType, ContentUsageModel};
use loyalty_core_db::models::member::MemberModel;

use super::aggregate::top_n_by;
use super::table::ReportRow;

const LAST_LOGIN_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct LoginRow {
    pub name: String,
    pub tier: Tier,
    pub login_count: u32,
    pub last_login: DateTime<Utc>,
}

impl From<&MemberModel> for LoginRow {
    fn from(m: &MemberModel) -> Self {
        Self {
            name: m.name.clone(),
            tier: m.tier,
            login_count: m.login_count,
            last_login: m.last_login,
        }
    }
}

impl ReportRow for LoginRow {
    fn headers() -> &'static [&'static str] {
        &["Name", "Tier", "LoginCount", "LastLogin"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.tier.to_string(),
            self.login_count.to_string(),
            self.last_login.format(LAST_LOGIN_FORMAT).to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedLoginRow {
    /// 1-based
    pub rank: usize,
    pub login: LoginRow,
}

impl ReportRow for RankedLoginRow {
    fn headers() -> &'static [&'static str] {
        &["Rank", "Name", "Tier", "LoginCount", "LastLogin"]
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = vec![self.rank.to_string()];
        cells.extend(self.login.cells());
        cells
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentUsageRow {
    pub name: String,
    pub content_type: ContentType,
    pub views: u64,
}

impl ReportRow for ContentUsageRow {
    fn headers() -> &'static [&'static str] {
        &["Name", "Type", "Views"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.content_type.to_string(), self.views.to_string()]
    }
}

/// Every member, most recent login first.
pub fn login_history(members: &[MemberModel]) -> Vec<LoginRow> {
    top_n_by(members, |m| m.last_login, members.len())
        .iter()
        .map(LoginRow::from)
        .collect()
}

pub fn top_active_members(members: &[MemberModel], limit: usize) -> Vec<RankedLoginRow> {
    top_n_by(members, |m| m.login_count, limit)
        .iter()
        .enumerate()
        .map(|(i, m)| RankedLoginRow {
            rank: i + 1,
            login: LoginRow::from(m),
        })
        .collect()
}

/// Content sorted by views, most viewed first.
pub fn content_usage(items: &[ContentUsageModel]) -> Vec<ContentUsageRow> {
    top_n_by(items, |c| c.views, items.len())
        .into_iter()
        .map(|c| ContentUsageRow {
            name: c.name,
            content_type: c.content_type,
            views: c.views,
        })
        .collect()
}
