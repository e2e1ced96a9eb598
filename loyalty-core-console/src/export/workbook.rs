use loyalty_core_api::error::{ApiError, ApiResult};

use super::spreadsheet::export_spreadsheet;
use crate::reports::table::ReportTable;

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub table: ReportTable,
}

impl Sheet {
    pub fn new(name: impl Into<String>, table: ReportTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }
}

/// Ordered set of named sheets exported together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

/// Exports every sheet as its own CSV document, in workbook order.
///
/// Fails as a whole if any sheet is not ready or the workbook is empty.
pub fn export_workbook(workbook: &Workbook) -> ApiResult<Vec<(String, Vec<u8>)>> {
    if workbook.sheets.is_empty() {
        return Err(ApiError::ExportError("workbook has no sheets".to_string()));
    }
    workbook
        .sheets
        .iter()
        .map(|sheet| export_spreadsheet(&sheet.name, &sheet.table).map(|bytes| (sheet.name.clone(), bytes)))
        .collect()
}
