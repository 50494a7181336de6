use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// How a coupon's `discount` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Currency amount subtracted from the order total
    Fixed,
    /// Percent of the order total (10 = 10%).
    /// Any unrecognised type on the wire falls back to this.
    #[default]
    #[serde(other)]
    Percentage,
}

/// Discount attached to an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Missing or null discount means the coupon has no effect
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount: Decimal,

    #[serde(default, deserialize_with = "null_as_default")]
    pub discount_type: DiscountType,
}

/// Treat an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Coupon {
    pub fn fixed(discount: Decimal) -> Self {
        Self {
            discount,
            discount_type: DiscountType::Fixed,
        }
    }

    pub fn percentage(discount: Decimal) -> Self {
        Self {
            discount,
            discount_type: DiscountType::Percentage,
        }
    }

    /// A zero discount leaves the order untouched
    pub fn is_active(&self) -> bool {
        !self.discount.is_zero()
    }

    /// Amount taken off `base`
    ///
    /// Fixed coupons subtract their amount as-is, even when it exceeds `base`.
    /// Percentage coupons take `base * discount / 100`.
    pub fn discount_for(&self, base: Decimal) -> Decimal {
        if !self.is_active() {
            return Decimal::ZERO;
        }

        match self.discount_type {
            DiscountType::Fixed => self.discount,
            DiscountType::Percentage => base * (self.discount / Decimal::ONE_HUNDRED),
        }
    }
}
