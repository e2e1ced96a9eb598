use chrono::{Days, Months, NaiveDate};
use loyalty_core_api::domain::{DateRange, EmptyBoundPolicy, Tier};
use loyalty_core_db::models::member::MemberModel;

use super::aggregate::{filter_by_date_range, group_and_count, ZeroCountPolicy};
use super::table::ReportRow;

/// Zero-member tiers are left out of the tier distribution, as the console
/// always showed it.
pub const TIER_DISTRIBUTION_ZERO_POLICY: ZeroCountPolicy = ZeroCountPolicy::Omit;

#[derive(Debug, Clone, PartialEq)]
pub struct MemberListRow {
    pub code: String,
    pub name: String,
    pub tier: Tier,
    pub points: i64,
    pub join_date: NaiveDate,
    pub last_visit: NaiveDate,
    pub expires_on: NaiveDate,
    pub email: String,
    pub phone: String,
    pub nrc: String,
}

impl From<&MemberModel> for MemberListRow {
    fn from(m: &MemberModel) -> Self {
        Self {
            code: m.code.to_string(),
            name: m.name.clone(),
            tier: m.tier,
            points: m.points,
            join_date: m.join_date,
            last_visit: m.last_visit_date,
            expires_on: m.expiration_date,
            email: m.email.clone(),
            phone: m.phone.to_string(),
            nrc: m.nrc.to_string(),
        }
    }
}

impl ReportRow for MemberListRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Tier", "Points", "JoinDate", "LastVisit", "ExpiresOn", "Email", "Phone", "NRC"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.tier.to_string(),
            self.points.to_string(),
            self.join_date.to_string(),
            self.last_visit.to_string(),
            self.expires_on.to_string(),
            self.email.clone(),
            self.phone.clone(),
            self.nrc.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMemberRow {
    pub code: String,
    pub name: String,
    pub tier: Tier,
    pub join_date: NaiveDate,
    pub email: String,
}

impl ReportRow for NewMemberRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Tier", "JoinDate", "Email"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.tier.to_string(),
            self.join_date.to_string(),
            self.email.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpiringMemberRow {
    pub name: String,
    pub tier: Tier,
    pub expires_on: NaiveDate,
    pub phone: String,
}

impl ReportRow for ExpiringMemberRow {
    fn headers() -> &'static [&'static str] {
        &["Name", "Tier", "ExpiresOn", "Phone"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.tier.to_string(),
            self.expires_on.to_string(),
            self.phone.clone(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl MemberStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberStatusRow {
    pub name: String,
    pub last_visit: NaiveDate,
    pub status: MemberStatus,
}

impl ReportRow for MemberStatusRow {
    fn headers() -> &'static [&'static str] {
        &["Name", "LastVisit", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.last_visit.to_string(),
            self.status.as_str().to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberStatusReport {
    pub rows: Vec<MemberStatusRow>,
    pub active: usize,
    pub inactive: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierCountRow {
    pub tier: Tier,
    pub count: usize,
}

impl ReportRow for TierCountRow {
    fn headers() -> &'static [&'static str] {
        &["Tier", "Count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.tier.to_string(), self.count.to_string()]
    }
}

pub fn member_list(members: &[MemberModel]) -> Vec<MemberListRow> {
    members.iter().map(MemberListRow::from).collect()
}

/// Members who joined inside `range`. Nothing is listed until both bounds
/// are set.
pub fn new_members(members: &[MemberModel], range: &DateRange) -> Vec<NewMemberRow> {
    filter_by_date_range(members, |m| m.join_date, range, EmptyBoundPolicy::ShowNone)
        .iter()
        .map(|m| NewMemberRow {
            code: m.code.to_string(),
            name: m.name.clone(),
            tier: m.tier,
            join_date: m.join_date,
            email: m.email.clone(),
        })
        .collect()
}

/// Members whose membership expires between `today` and `today + window_days`,
/// both inclusive.
pub fn expiring_members(members: &[MemberModel], today: NaiveDate, window_days: u32) -> Vec<ExpiringMemberRow> {
    let until = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    let window = DateRange::new(today, until);
    filter_by_date_range(members, |m| m.expiration_date, &window, EmptyBoundPolicy::ShowNone)
        .iter()
        .map(|m| ExpiringMemberRow {
            name: m.name.clone(),
            tier: m.tier,
            expires_on: m.expiration_date,
            phone: m.phone.to_string(),
        })
        .collect()
}

/// Active means a visit on or after `today` minus `inactive_after_months`.
pub fn member_status(members: &[MemberModel], today: NaiveDate, inactive_after_months: u32) -> MemberStatusReport {
    let cutoff = today
        .checked_sub_months(Months::new(inactive_after_months))
        .unwrap_or(NaiveDate::MIN);

    let rows: Vec<MemberStatusRow> = members
        .iter()
        .map(|m| MemberStatusRow {
            name: m.name.clone(),
            last_visit: m.last_visit_date,
            status: if m.last_visit_date >= cutoff {
                MemberStatus::Active
            } else {
                MemberStatus::Inactive
            },
        })
        .collect();
    let active = rows.iter().filter(|r| r.status == MemberStatus::Active).count();

    MemberStatusReport {
        inactive: rows.len() - active,
        active,
        rows,
    }
}

pub fn tier_distribution(members: &[MemberModel], policy: ZeroCountPolicy) -> Vec<TierCountRow> {
    group_and_count(members, |m| m.tier, &Tier::ALL, policy)
        .into_iter()
        .map(|c| TierCountRow {
            tier: c.category,
            count: c.count,
        })
        .collect()
}
