use chrono::NaiveDate;
use loyalty_core_api::domain::{DateRange, EmptyBoundPolicy, Tier};
use loyalty_core_db::models::transaction::{TransactionModel, TransactionStatus};
use rust_decimal::Decimal;

use super::aggregate::filter_by_date_range;
use super::table::ReportRow;

/// Date, member, description and amount of one payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    pub date: NaiveDate,
    pub member: String,
    pub description: String,
    pub amount: Decimal,
}

impl From<&TransactionModel> for PaymentRow {
    fn from(t: &TransactionModel) -> Self {
        Self {
            date: t.date,
            member: t.member_name.clone(),
            description: t.description.clone(),
            amount: t.amount,
        }
    }
}

impl ReportRow for PaymentRow {
    fn headers() -> &'static [&'static str] {
        &["Date", "Member", "Description", "Amount"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            self.member.clone(),
            self.description.clone(),
            self.amount.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    pub rows: Vec<PaymentRow>,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierRevenueRow {
    pub tier: Tier,
    pub revenue: Decimal,
    pub count: usize,
}

impl ReportRow for TierRevenueRow {
    fn headers() -> &'static [&'static str] {
        &["Tier", "Revenue", "Count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.tier.to_string(), self.revenue.to_string(), self.count.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub payment: PaymentRow,
    pub status: TransactionStatus,
}

impl ReportRow for TransactionRow {
    fn headers() -> &'static [&'static str] {
        &["Date", "Member", "Description", "Amount", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = self.payment.cells();
        cells.push(self.status.to_string());
        cells
    }
}

/// Successful sales inside `range`, with their total. A range with an empty
/// bound does not filter.
pub fn sales_revenue(transactions: &[TransactionModel], range: &DateRange) -> SalesReport {
    let successful: Vec<TransactionModel> = transactions.iter().filter(|t| t.is_success()).cloned().collect();
    let rows: Vec<PaymentRow> = filter_by_date_range(&successful, |t| t.date, range, EmptyBoundPolicy::ShowAll)
        .iter()
        .map(PaymentRow::from)
        .collect();
    let total = rows.iter().map(|r| r.amount).sum();
    SalesReport { rows, total }
}

/// Successful revenue and sale count per member tier, lowest tier first.
/// Tiers without a sale are left out.
pub fn revenue_by_tier(transactions: &[TransactionModel]) -> Vec<TierRevenueRow> {
    Tier::ALL
        .iter()
        .filter_map(|&tier| {
            let (revenue, count) = transactions
                .iter()
                .filter(|t| t.is_success() && t.member_tier == tier)
                .fold((Decimal::ZERO, 0), |(sum, n), t| (sum + t.amount, n + 1));
            (count > 0).then_some(TierRevenueRow { tier, revenue, count })
        })
        .collect()
}

pub fn all_transactions(transactions: &[TransactionModel]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|t| TransactionRow {
            payment: PaymentRow::from(t),
            status: t.status,
        })
        .collect()
}

pub fn failed_payments(transactions: &[TransactionModel]) -> Vec<PaymentRow> {
    transactions
        .iter()
        .filter(|t| t.status == TransactionStatus::Failed)
        .map(PaymentRow::from)
        .collect()
}
