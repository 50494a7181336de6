//! Order report aggregation
//!
//! Filters storefront orders by date, computes per-order totals with coupon
//! discounts and summarises revenue, item counts and orders per status.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::orders;
pub use modules::reports;
