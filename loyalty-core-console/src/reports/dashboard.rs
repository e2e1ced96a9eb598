use loyalty_core_db::models::dashboard::{
    DashboardModel, PointsTrendPoint, RedeemedItem, SalesPoint, TierCount,
};

use super::table::{ReportRow, ReportTable};
use crate::export::workbook::{Sheet, Workbook};

struct SummaryRow {
    metric: &'static str,
    value: u64,
}

impl ReportRow for SummaryRow {
    fn headers() -> &'static [&'static str] {
        &["Metric", "Value"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.metric.to_string(), self.value.to_string()]
    }
}

// Chart series keep their payload field names as headers.

impl ReportRow for TierCount {
    fn headers() -> &'static [&'static str] {
        &["name", "value"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.to_string(), self.value.to_string()]
    }
}

impl ReportRow for SalesPoint {
    fn headers() -> &'static [&'static str] {
        &["month", "sales", "redemptions"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.month.clone(), self.sales.to_string(), self.redemptions.to_string()]
    }
}

impl ReportRow for RedeemedItem {
    fn headers() -> &'static [&'static str] {
        &["name", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.count.to_string()]
    }
}

impl ReportRow for PointsTrendPoint {
    fn headers() -> &'static [&'static str] {
        &["date", "points"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.date.to_string(), self.points.to_string()]
    }
}

/// The dashboard as a five-sheet workbook: summary figures followed by one
/// sheet per chart series.
pub fn dashboard_workbook(data: &DashboardModel) -> Workbook {
    let summary = [
        SummaryRow {
            metric: "Total Members",
            value: data.total_members,
        },
        SummaryRow {
            metric: "Active Promotions",
            value: u64::from(data.active_promotions),
        },
        SummaryRow {
            metric: "Points Redeemed",
            value: data.total_points_redeemed,
        },
    ];

    Workbook {
        sheets: vec![
            Sheet::new("Dashboard Summary", ReportTable::from_rows(&summary)),
            Sheet::new("Tier Distribution", ReportTable::from_rows(&data.tier_distribution)),
            Sheet::new("Sales vs Redemption", ReportTable::from_rows(&data.sales_vs_redemption)),
            Sheet::new("Most Redeemed Items", ReportTable::from_rows(&data.most_redeemed_items)),
            Sheet::new("Points Usage Trends", ReportTable::from_rows(&data.points_usage_trends)),
        ],
    }
}
