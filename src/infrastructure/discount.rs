use crate::domain::commission::AppliedDiscount;
use crate::domain::merchant::{Merchant, MerchantTier};
use crate::domain::money::round_money;
use crate::domain::ports::DiscountPolicy;
use crate::error::{CommissionError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Factors used by [`TierVolumePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountConfig {
    /// Multiplier for Premium and HighVolume merchants.
    pub tier_factor: Decimal,
    /// Multiplier once monthly volume exceeds `volume_threshold`.
    pub volume_factor: Decimal,
    /// Strict lower bound: a volume equal to it earns no discount.
    pub volume_threshold: Decimal,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            tier_factor: dec!(0.80),
            volume_factor: dec!(0.85),
            volume_threshold: dec!(10000),
        }
    }
}

impl DiscountConfig {
    pub fn validate(&self) -> Result<()> {
        for (field, factor) in [
            ("tier_factor", self.tier_factor),
            ("volume_factor", self.volume_factor),
        ] {
            if factor < Decimal::ZERO || factor > Decimal::ONE {
                return Err(CommissionError::InvalidRule(format!(
                    "{field} must be between 0 and 1, got {factor}"
                )));
            }
        }
        if self.volume_threshold < Decimal::ZERO {
            return Err(CommissionError::InvalidRule(format!(
                "volume_threshold must not be negative, got {}",
                self.volume_threshold
            )));
        }
        Ok(())
    }
}

/// Tier discount first, then volume discount, multiplied together and rounded
/// to cents once at the end.
#[derive(Debug, Clone, Default)]
pub struct TierVolumePolicy {
    config: DiscountConfig,
}

impl TierVolumePolicy {
    pub fn new(config: DiscountConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl DiscountPolicy for TierVolumePolicy {
    fn apply(&self, base_commission: Decimal, merchant: &Merchant) -> AppliedDiscount {
        let mut running = base_commission;

        let tier_discount = if merchant.tier.is_discounted() {
            running *= self.config.tier_factor;
            Some(Decimal::ONE - self.config.tier_factor)
        } else {
            if let MerchantTier::Other(tier) = &merchant.tier {
                warn!(merchant = %merchant.id, tier = %tier, "unknown merchant tier, priced as Standard");
            }
            None
        };

        let volume_discount = if merchant.monthly_volume > self.config.volume_threshold {
            running *= self.config.volume_factor;
            Some(Decimal::ONE - self.config.volume_factor)
        } else {
            None
        };

        let discounted = round_money(running);
        AppliedDiscount {
            discounted,
            discount_amount: base_commission - discounted,
            tier_discount,
            volume_discount,
            volume_threshold: self.config.volume_threshold,
        }
    }
}
