mod coupon;
mod order;
mod status;

pub use coupon::{Coupon, DiscountType};
pub use order::{
    validate_unique_ids, ContactInfo, Item, Order, MAX_AMOUNT, MAX_PERCENTAGE, MAX_QUANTITY,
};
pub use status::OrderStatus;
