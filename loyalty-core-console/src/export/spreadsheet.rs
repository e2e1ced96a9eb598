use loyalty_core_api::error::ApiResult;

use super::ensure_ready;
use crate::reports::table::ReportTable;

/// Renders `table` as a single CSV sheet: header row first, then one line per
/// row.
pub fn export_spreadsheet(title: &str, table: &ReportTable) -> ApiResult<Vec<u8>> {
    ensure_ready(title, table)?;

    let mut out = String::new();
    write_record(&mut out, &table.headers);
    for row in &table.rows {
        write_record(&mut out, row);
    }

    tracing::debug!(title, rows = table.row_count(), "exported spreadsheet");
    Ok(out.into_bytes())
}

fn write_record(out: &mut String, cells: &[String]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if cell.contains([',', '"', '\n', '\r']) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use loyalty_core_api::error::ApiError;

    fn table(rows: Vec<Vec<&str>>) -> ReportTable {
        ReportTable::new(
            vec!["Name".to_string(), "Amount".to_string()],
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        )
    }

    #[test]
    fn test_header_then_rows() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bytes = export_spreadsheet("Sales", &table(vec![vec!["Aung", "1000"], vec!["Su", "2000"]]))?;
        let text = String::from_utf8(bytes)?;
        assert_eq!(text, "Name,Amount\nAung,1000\nSu,2000\n");
        Ok(())
    }

    #[test]
    fn test_quotes_special_cells() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bytes = export_spreadsheet("Sales", &table(vec![vec!["No. 5, \"Pyay\" Rd", "1"]]))?;
        let text = String::from_utf8(bytes)?;
        assert_eq!(text.lines().nth(1), Some("\"No. 5, \"\"Pyay\"\" Rd\",1"));
        Ok(())
    }

    #[test]
    fn test_rejects_table_without_headers() {
        let err = export_spreadsheet("Empty", &ReportTable::default()).unwrap_err();
        assert!(matches!(err, ApiError::ExportError(_)));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = export_spreadsheet("Ragged", &table(vec![vec!["only one"]])).unwrap_err();
        assert!(matches!(err, ApiError::ExportError(_)));
    }
}
