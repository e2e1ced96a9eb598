//! Export sinks for report tables.
//!
//! Both sinks write every table row exactly once and refuse a table with no
//! header row.

pub mod document;
pub mod spreadsheet;
pub mod workbook;

pub use document::export_document;
pub use spreadsheet::export_spreadsheet;
pub use workbook::{export_workbook, Sheet, Workbook};

use loyalty_core_api::error::{ApiError, ApiResult};

use crate::reports::table::ReportTable;

pub(crate) fn ensure_ready(title: &str, table: &ReportTable) -> ApiResult<()> {
    if !table.is_ready() {
        tracing::warn!(title, "export rejected, table has no header row");
        return Err(ApiError::ExportError(format!("'{title}' has no header row")));
    }
    let width = table.headers.len();
    if let Some(position) = table.rows.iter().position(|row| row.len() != width) {
        return Err(ApiError::ExportError(format!(
            "'{title}' row {} has {} cells, expected {width}",
            position + 1,
            table.rows[position].len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::financial::{all_transactions, failed_payments, sales_revenue};
    use crate::reports::members::{member_list, tier_distribution, TIER_DISTRIBUTION_ZERO_POLICY};
    use crate::test_helper::{date, member, transaction};
    use loyalty_core_api::domain::{DateRange, Tier};
    use loyalty_core_db::models::transaction::TransactionStatus;
    use loyalty_core_memory::fixtures::{members::members, transactions::transactions};

    /// CSV records after the header; quoted cells may span lines.
    fn csv_rows(bytes: &[u8]) -> usize {
        let mut quoted = false;
        let mut records = 0;
        for c in String::from_utf8_lossy(bytes).chars() {
            match c {
                '"' => quoted = !quoted,
                '\n' if !quoted => records += 1,
                _ => {}
            }
        }
        records - 1
    }

    fn document_rows(text: &str) -> usize {
        text.lines().count() - 4 * (text.matches('\u{c}').count() + 1)
    }

    fn assert_row_counts(table: &ReportTable) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let sheet = export_spreadsheet("view", table)?;
        assert_eq!(csv_rows(&sheet), table.row_count());

        let document = String::from_utf8(export_document("view", table)?)?;
        assert_eq!(document_rows(&document), table.row_count());
        Ok(())
    }

    #[test]
    fn test_exports_carry_every_view_row() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let views = [
            ReportTable::from_rows(&member_list(&members())),
            ReportTable::from_rows(&sales_revenue(&transactions(), &DateRange::unbounded()).rows),
            ReportTable::from_rows(&failed_payments(&transactions())),
        ];

        for table in &views {
            assert_row_counts(table)?;
        }
        Ok(())
    }

    #[test]
    fn test_empty_views_export_header_only() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let failed = ReportTable::from_rows(&failed_payments(&[]));
        assert_eq!(failed.row_count(), 0);
        assert_row_counts(&failed)?;

        let tiers = ReportTable::from_rows(&tier_distribution(&[], TIER_DISTRIBUTION_ZERO_POLICY));
        assert_eq!(tiers.row_count(), 0);
        assert_row_counts(&tiers)?;
        Ok(())
    }

    #[test]
    fn test_tier_distribution_with_empty_tiers_exports_listed_rows(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let gold_only = [member("A", Tier::Gold, |_| {}), member("B", Tier::Gold, |_| {})];
        let table = ReportTable::from_rows(&tier_distribution(&gold_only, TIER_DISTRIBUTION_ZERO_POLICY));
        assert_eq!(table.row_count(), 1);
        assert_row_counts(&table)?;
        Ok(())
    }

    #[test]
    fn test_multi_line_cells_keep_row_count() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let members = [
            member("Aung\nKyaw", Tier::Normal, |m| m.address = "No. 5\nPyay Road".to_string()),
            member("Su, \"Su\"", Tier::Gold, |_| {}),
        ];
        assert_row_counts(&ReportTable::from_rows(&member_list(&members)))?;

        let mut refund = transaction(Tier::Gold, 1000, date(2024, 5, 1), TransactionStatus::Failed);
        refund.description = "Card declined\r\nretry\u{c}later".to_string();
        let history = [refund, transaction(Tier::Normal, 2000, date(2024, 5, 2), TransactionStatus::Success)];
        assert_row_counts(&ReportTable::from_rows(&all_transactions(&history)))?;
        assert_row_counts(&ReportTable::from_rows(&failed_payments(&history)))?;
        Ok(())
    }
}
