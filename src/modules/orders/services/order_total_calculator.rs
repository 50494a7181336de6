use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::orders::models::Order;

/// What to do when a coupon discount exceeds the order subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeTotalPolicy {
    /// Report the negative total as computed
    #[default]
    AllowNegative,
    /// Floor the total at zero
    ClampToZero,
}

impl std::str::FromStr for NegativeTotalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allow" | "allow_negative" => Ok(NegativeTotalPolicy::AllowNegative),
            "clamp" | "clamp_to_zero" => Ok(NegativeTotalPolicy::ClampToZero),
            _ => Err(format!("Invalid negative total policy: {}", s)),
        }
    }
}

/// OrderTotalCalculator computes the amount an order is worth after its coupon
///
/// total = Σ price × quantity, minus the coupon discount:
/// - fixed: the discount amount
/// - percentage: subtotal × discount / 100
///
/// No rounding is applied; presentation decides how to display the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderTotalCalculator {
    policy: NegativeTotalPolicy,
}

impl OrderTotalCalculator {
    pub fn new(policy: NegativeTotalPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> NegativeTotalPolicy {
        self.policy
    }

    /// Discount the order's coupon takes off its subtotal
    pub fn discount(&self, order: &Order) -> Decimal {
        order
            .active_coupon()
            .map(|coupon| coupon.discount_for(order.subtotal()))
            .unwrap_or(Decimal::ZERO)
    }

    /// Order total after discount
    pub fn total(&self, order: &Order) -> Decimal {
        let total = order.subtotal() - self.discount(order);

        match self.policy {
            NegativeTotalPolicy::AllowNegative => total,
            NegativeTotalPolicy::ClampToZero => total.max(Decimal::ZERO),
        }
    }
}
