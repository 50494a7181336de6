// Orders module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Coupon, DiscountType, Item, Order, OrderStatus};
pub use repositories::{InMemoryOrderRepository, JsonFileOrderRepository, OrderRepository};
pub use services::{NegativeTotalPolicy, OrderTotalCalculator};
