mod date_range;
mod report;

pub use date_range::DateRange;
pub use report::{empty_status_counts, OrderReport, OrderSummary, ReportTotals, StatusCounts};
