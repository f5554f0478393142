use super::commission::AppliedDiscount;
use super::merchant::Merchant;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Maps a transaction amount to a base commission.
///
/// Implementations must be pure: the same amount always yields the same base.
/// Amount validity is checked by the engine before a rule is invoked.
/// Returns `None` when the base is not representable (arithmetic overflow).
pub trait PricingRule: Send + Sync {
    fn calculate_base(&self, amount: Decimal) -> Option<Decimal>;
    /// Stable name used in diagnostics and the calculation trail.
    fn name(&self) -> &str;
    /// Formula rendered for audit display, e.g. `2.8% + $0.30`.
    fn formula(&self) -> String;
}

/// Lowers a base commission according to the merchant's attributes.
pub trait DiscountPolicy: Send + Sync {
    fn apply(&self, base_commission: Decimal, merchant: &Merchant) -> AppliedDiscount;
}

pub type PricingRuleRef = Arc<dyn PricingRule>;
pub type DiscountPolicyBox = Box<dyn DiscountPolicy>;
