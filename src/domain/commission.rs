use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a commission calculation.
///
/// A plain value: it carries no reference back to the engine and can be
/// serialized as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionResult {
    /// Commission produced by the pricing rule, in cents precision, before discounts.
    pub base_commission: Decimal,
    /// `base_commission - final_commission`.
    pub discount_amount: Decimal,
    /// Commission after tier and volume discounts, rounded once.
    pub final_commission: Decimal,
    /// Human-readable audit trail. Not meant to be parsed.
    pub calculation_detail: String,
}

/// Discount outcome reported by a [`DiscountPolicy`](super::ports::DiscountPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedDiscount {
    pub discounted: Decimal,
    pub discount_amount: Decimal,
    /// Fraction removed by the tier discount, if it applied.
    pub tier_discount: Option<Decimal>,
    /// Fraction removed by the volume discount, if it applied.
    pub volume_discount: Option<Decimal>,
    /// Volume above which the volume discount applies.
    pub volume_threshold: Decimal,
}
