use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use loyalty_core_api::domain::DateRange;
use loyalty_core_api::error::ApiError;
use loyalty_core_console::export::{export_document, export_spreadsheet, export_workbook};
use loyalty_core_console::reclassify::reclassify;
use loyalty_core_console::reports::dashboard::dashboard_workbook;
use loyalty_core_console::reports::{engagement, financial, members, ReportRow, ReportTable};
use loyalty_core_console::{logging, AppStore, ConsoleConfig, FilePreferenceStore};
use loyalty_core_db::models::tier_rule::TierRuleBook;
use loyalty_core_db::repository::data_source::LoyaltyDataSource;
use loyalty_core_memory::MockDataService;
use std::sync::Arc;

/// Writes `<name>.csv` and `<name>.txt` for one report view.
fn write_report<R: ReportRow>(dir: &Path, name: &str, title: &str, rows: &[R]) -> anyhow::Result<()> {
    let table = ReportTable::from_rows(rows);
    let csv = export_spreadsheet(title, &table)?;
    let document = export_document(title, &table)?;
    std::fs::write(dir.join(format!("{name}.csv")), csv).with_context(|| format!("writing {name}.csv"))?;
    std::fs::write(dir.join(format!("{name}.txt")), document).with_context(|| format!("writing {name}.txt"))?;
    tracing::info!(report = name, rows = table.row_count(), "report written");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env();
    logging::init_logger(&config.log_level, config.log_json)?;

    let preferences = Arc::new(FilePreferenceStore::new(&config.preferences_path));
    let store = AppStore::new(preferences, None);
    tracing::info!(theme = store.state().theme.as_str(), "console starting");

    let service = MockDataService::seeded(config.latency());
    let source: &dyn LoyaltyDataSource = &service;
    let today = Utc::now().date_naive();

    let (members_list, transactions, content, dashboard, rules) = tokio::try_join!(
        source.members(),
        source.transactions(),
        source.content_usage(),
        source.dashboard(),
        source.tier_rules(),
    )
    .map_err(ApiError::from)?;

    let dir = config.export_dir.as_path();
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    write_report(dir, "member_list", "Full Member List", &members::member_list(&members_list))?;
    write_report(
        dir,
        "expiring_members",
        "Expiring Soon",
        &members::expiring_members(&members_list, today, config.expiring_window_days),
    )?;
    write_report(
        dir,
        "member_status",
        "Member Status",
        &members::member_status(&members_list, today, config.inactive_after_months).rows,
    )?;
    write_report(
        dir,
        "tier_distribution",
        "Tier Distribution",
        &members::tier_distribution(&members_list, members::TIER_DISTRIBUTION_ZERO_POLICY),
    )?;

    let sales = financial::sales_revenue(&transactions, &DateRange::unbounded());
    tracing::info!(total = %sales.total, "sales revenue");
    write_report(dir, "sales_revenue_report", "Sales Revenue", &sales.rows)?;
    write_report(dir, "revenue_by_plan", "Revenue by Tier", &financial::revenue_by_tier(&transactions))?;
    write_report(dir, "all_transactions", "All Transactions", &financial::all_transactions(&transactions))?;
    write_report(dir, "failed_payments", "Failed Payments", &financial::failed_payments(&transactions))?;

    write_report(dir, "login_history", "Login History", &engagement::login_history(&members_list))?;
    write_report(
        dir,
        "top_active_members",
        "Top Active Members",
        &engagement::top_active_members(&members_list, config.top_active_limit),
    )?;
    write_report(dir, "content_usage", "Content Usage", &engagement::content_usage(&content))?;

    for (sheet, bytes) in export_workbook(&dashboard_workbook(&dashboard))? {
        let file = format!("dashboard_{}.csv", sheet.to_lowercase().replace(' ', "_"));
        std::fs::write(dir.join(&file), bytes).with_context(|| format!("writing {file}"))?;
    }

    let proposals = reclassify(&members_list, &TierRuleBook::from_rules(rules));
    for change in &proposals {
        tracing::info!(member_id = %change.member_id, from = %change.from, to = %change.to, "tier change proposed");
    }
    tracing::info!(
        proposed = proposals.len(),
        export_dir = %dir.display(),
        "exports complete"
    );
    Ok(())
}
