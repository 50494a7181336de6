// Order model as delivered by the storefront order store.
//
// Orders are read-only inputs to reporting: the core derives totals from them
// but never changes them. Shape checks happen once, when the store hands the
// orders over (`Order::validate`, `validate_unique_ids`).

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::coupon::{Coupon, DiscountType};
use super::status::OrderStatus;
use crate::core::{AppError, Result};

/// Largest unit price or fixed discount accepted from the store
pub const MAX_AMOUNT: u64 = 1_000_000_000;

/// Largest percentage discount accepted from the store
pub const MAX_PERCENTAGE: u64 = 10_000;

/// Largest quantity accepted on a single line
pub const MAX_QUANTITY: u32 = 1_000_000;

/// Customer contact captured at checkout (opaque to reporting)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

/// A single order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Price per unit
    pub price: Decimal,

    /// Units ordered, absent on some legacy records
    #[serde(rename = "amount", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl Item {
    pub fn new(price: Decimal, quantity: u32) -> Self {
        Self {
            price,
            quantity: Some(quantity),
        }
    }

    /// Quantity, treating a missing value as zero
    pub fn units(&self) -> u32 {
        self.quantity.unwrap_or(0)
    }

    /// price × quantity
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.units())
    }
}

/// A customer purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique, increasing with creation; used as the display sort key
    pub order_id: i64,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub contact_info: ContactInfo,

    #[serde(default)]
    pub items: Vec<Item>,

    pub status: OrderStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<Coupon>,
}

impl Order {
    pub fn new(order_id: i64, created_at: DateTime<Utc>, status: OrderStatus) -> Self {
        Self {
            order_id,
            created_at,
            contact_info: ContactInfo::default(),
            items: Vec::new(),
            status,
            coupon: None,
        }
    }

    pub fn with_contact(mut self, name: impl Into<String>, phone: impl Into<String>) -> Self {
        self.contact_info = ContactInfo {
            name: name.into(),
            phone: phone.into(),
        };
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_coupon(mut self, coupon: Coupon) -> Self {
        self.coupon = Some(coupon);
        self
    }

    /// Sum of line totals, before any coupon
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(Item::line_total).sum()
    }

    /// Total units across all lines
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.units())).sum()
    }

    /// Coupon with a non-zero discount, if any
    pub fn active_coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref().filter(|coupon| coupon.is_active())
    }

    pub fn is_cancelled(&self) -> bool {
        self.status.is_cancelled()
    }

    /// Check the record is usable for reporting
    ///
    /// Amounts are capped so that totals over any realistic order
    /// collection stay inside `Decimal` range.
    pub fn validate(&self) -> Result<()> {
        let max_amount = Decimal::from(MAX_AMOUNT);

        for (position, item) in self.items.iter().enumerate() {
            if item.price < Decimal::ZERO || item.price > max_amount {
                return Err(AppError::validation(format!(
                    "Order {} item {} price must be between 0 and {}, got: {}",
                    self.order_id, position, MAX_AMOUNT, item.price
                )));
            }

            if item.units() > MAX_QUANTITY {
                return Err(AppError::validation(format!(
                    "Order {} item {} quantity cannot exceed {}, got: {}",
                    self.order_id,
                    position,
                    MAX_QUANTITY,
                    item.units()
                )));
            }
        }

        if let Some(coupon) = &self.coupon {
            let limit = match coupon.discount_type {
                DiscountType::Fixed => MAX_AMOUNT,
                DiscountType::Percentage => MAX_PERCENTAGE,
            };

            if coupon.discount < Decimal::ZERO || coupon.discount > Decimal::from(limit) {
                return Err(AppError::validation(format!(
                    "Order {} coupon discount must be between 0 and {}, got: {}",
                    self.order_id, limit, coupon.discount
                )));
            }
        }

        Ok(())
    }
}

/// Reject collections where two orders share an identifier
pub fn validate_unique_ids(orders: &[Order]) -> Result<()> {
    let mut seen = HashSet::with_capacity(orders.len());
    for order in orders {
        if !seen.insert(order.order_id) {
            return Err(AppError::validation(format!(
                "Duplicate order id: {}",
                order.order_id
            )));
        }
    }
    Ok(())
}
