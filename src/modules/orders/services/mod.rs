pub mod order_total_calculator;

pub use order_total_calculator::{NegativeTotalPolicy, OrderTotalCalculator};
