/// A row that can be laid out in a report table.
pub trait ReportRow {
    /// Column names, in cell order.
    fn headers() -> &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Rectangular text table handed to the export sinks.
///
/// A table without headers is not ready to export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn from_rows<R: ReportRow>(rows: &[R]) -> Self {
        Self {
            headers: R::headers().iter().map(|h| h.to_string()).collect(),
            rows: rows.iter().map(ReportRow::cells).collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_ready(&self) -> bool {
        !self.headers.is_empty()
    }
}
