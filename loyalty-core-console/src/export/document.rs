use loyalty_core_api::error::ApiResult;

use super::ensure_ready;
use crate::reports::table::ReportTable;

pub const ROWS_PER_PAGE: usize = 40;

const COLUMN_GAP: &str = " | ";
const PAGE_BREAK: char = '\u{c}';

/// Renders `table` as fixed-width text pages.
///
/// Every page repeats the title and the upper-cased header over a `=` rule,
/// and ends with a `Page i of n` footer. Pages are separated by a form feed.
/// An empty table still yields one page. Line breaks inside a cell are shown
/// as `⏎` so every row stays on one line.
pub fn export_document(title: &str, table: &ReportTable) -> ApiResult<Vec<u8>> {
    ensure_ready(title, table)?;

    let title = single_line(title);
    let headers: Vec<String> = table
        .headers
        .iter()
        .map(|h| single_line(h).to_uppercase())
        .collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| single_line(cell)).collect())
        .collect();
    let widths = column_widths(&headers, &rows);
    let header_line = format_line(&headers, &widths);
    let rule = "=".repeat(header_line.chars().count());

    let chunks: Vec<&[Vec<String>]> = if rows.is_empty() {
        vec![rows.as_slice()]
    } else {
        rows.chunks(ROWS_PER_PAGE).collect()
    };
    let page_count = chunks.len();

    let mut out = String::new();
    for (index, rows) in chunks.into_iter().enumerate() {
        if index > 0 {
            out.push(PAGE_BREAK);
        }
        out.push_str(&title);
        out.push('\n');
        out.push_str(&header_line);
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        for row in rows {
            out.push_str(&format_line(row, &widths));
            out.push('\n');
        }
        out.push_str(&format!("Page {} of {page_count}\n", index + 1));
    }

    tracing::debug!(title = %title, rows = table.row_count(), pages = page_count, "exported document");
    Ok(out.into_bytes())
}

fn single_line(cell: &str) -> String {
    cell.replace("\r\n", "\n")
        .chars()
        .map(|c| match c {
            '\n' | '\r' => '⏎',
            c if c.is_control() => ' ',
            c => c,
        })
        .collect()
}

fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use loyalty_core_api::error::ApiError;

    fn numbered(count: usize) -> ReportTable {
        ReportTable::new(
            vec!["Rank".to_string(), "Name".to_string()],
            (1..=count).map(|i| vec![i.to_string(), format!("member {i}")]).collect(),
        )
    }

    /// Body lines across all pages: everything that is not title, header,
    /// rule or footer.
    fn body_lines(text: &str) -> usize {
        text.split(PAGE_BREAK)
            .map(|page| {
                let lines: Vec<&str> = page.lines().collect();
                lines.len() - 4
            })
            .sum()
    }

    #[test]
    fn test_single_page_layout() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let text = String::from_utf8(export_document("Top Members", &numbered(2))?)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Top Members");
        assert_eq!(lines[1], "RANK | NAME");
        assert_eq!(lines[2], "=".repeat(lines[1].len()));
        assert_eq!(lines[3], "1    | member 1");
        assert_eq!(lines.last(), Some(&"Page 1 of 1"));
        Ok(())
    }

    #[test]
    fn test_paginates_without_losing_rows() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let rows = ROWS_PER_PAGE * 2 + 5;
        let text = String::from_utf8(export_document("Logins", &numbered(rows))?)?;
        assert_eq!(text.matches(PAGE_BREAK).count(), 2);
        assert!(text.ends_with("Page 3 of 3\n"));
        assert_eq!(body_lines(&text), rows);
        Ok(())
    }

    #[test]
    fn test_output_is_deterministic() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        assert_eq!(export_document("A", &numbered(3))?, export_document("A", &numbered(3))?);
        Ok(())
    }

    #[test]
    fn test_empty_table_gets_one_page() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let text = String::from_utf8(export_document("None", &numbered(0))?)?;
        assert_eq!(body_lines(&text), 0);
        assert!(text.ends_with("Page 1 of 1\n"));
        Ok(())
    }

    #[test]
    fn test_multi_line_cells_stay_on_one_row() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let table = ReportTable::new(
            vec!["Name".to_string(), "Address".to_string()],
            vec![
                vec!["Aung".to_string(), "No. 5\nPyay Road".to_string()],
                vec!["Su".to_string(), "Yangon\r\n\u{c}Hlaing".to_string()],
            ],
        );
        let text = String::from_utf8(export_document("Members\nby address", &table)?)?;
        assert_eq!(text.matches(PAGE_BREAK).count(), 0);
        assert_eq!(body_lines(&text), 2);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Members⏎by address");
        assert_eq!(lines[3], "Aung | No. 5⏎Pyay Road");
        assert_eq!(lines[4], "Su   | Yangon⏎ Hlaing");
        Ok(())
    }

    #[test]
    fn test_rejects_table_without_headers() {
        assert!(matches!(
            export_document("Empty", &ReportTable::default()),
            Err(ApiError::ExportError(_))
        ));
    }
}
