pub mod access;
pub mod error;
pub mod timezone;

pub use access::{AccessPolicy, StaticAccess};
pub use error::{AppError, Result};
pub use timezone::ReportTimezone;
