use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// What a date filter does while one of its bounds is still empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyBoundPolicy {
    ShowAll,
    ShowNone,
}

/// Inclusive `[start, end]` window, either bound possibly unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Parses `YYYY-MM-DD` form inputs; blank input leaves the bound unset.
    pub fn parse(start: &str, end: &str) -> ApiResult<Self> {
        Ok(Self {
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn contains(&self, date: NaiveDate, policy: EmptyBoundPolicy) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => policy == EmptyBoundPolicy::ShowAll,
        }
    }
}

fn parse_bound(input: &str) -> ApiResult<Option<NaiveDate>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| ApiError::ValidationError(format!("Invalid date '{trimmed}': {e}")))
}
