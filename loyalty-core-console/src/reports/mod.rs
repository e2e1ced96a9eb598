pub mod aggregate;
pub mod dashboard;
pub mod engagement;
pub mod financial;
pub mod members;
pub mod table;

pub use aggregate::{filter_by_date_range, group_and_count, top_n_by, CategoryCount, ZeroCountPolicy};
pub use table::{ReportRow, ReportTable};
