pub mod models;
pub mod services;

pub use models::{DateRange, OrderReport, OrderSummary, ReportTotals};
pub use services::{build_report, ReportOptions, ReportService};
