use crate::domain::channel::Channel;
use crate::domain::money::{format_money, format_rate};
use crate::domain::ports::{PricingRule, PricingRuleRef};
use crate::error::{CommissionError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::sync::Arc;

/// Percentage-plus-fixed-fee pricing: `base = amount * rate + fixed_fee`.
///
/// No clamping is applied; the engine validates the amount beforehand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRule {
    name: String,
    rate: Decimal,
    fixed_fee: Decimal,
}

impl RateRule {
    /// Builds a rule, rejecting an empty name or a negative rate or fee.
    pub fn new(name: impl Into<String>, rate: Decimal, fixed_fee: Decimal) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CommissionError::InvalidRule(
                "rule name must not be empty".to_string(),
            ));
        }
        if rate < Decimal::ZERO {
            return Err(CommissionError::InvalidRule(format!(
                "{name}: rate must not be negative, got {rate}"
            )));
        }
        if fixed_fee < Decimal::ZERO {
            return Err(CommissionError::InvalidRule(format!(
                "{name}: fixed fee must not be negative, got {fixed_fee}"
            )));
        }
        Ok(Self {
            name,
            rate,
            fixed_fee,
        })
    }

    pub fn credit_card() -> Self {
        Self::built_in("Credit Card", dec!(0.028), dec!(0.30))
    }

    pub fn debit_card() -> Self {
        Self::built_in("Debit Card", dec!(0.019), dec!(0.25))
    }

    pub fn bank_transfer() -> Self {
        Self::built_in("Bank Transfer", dec!(0.012), dec!(0.15))
    }

    pub fn qr_payment() -> Self {
        Self::built_in("QR Payment", dec!(0.008), dec!(0.10))
    }

    /// The built-in rule for `channel`, if it has one.
    pub fn for_channel(channel: &Channel) -> Option<Self> {
        match channel {
            Channel::CreditCard => Some(Self::credit_card()),
            Channel::DebitCard => Some(Self::debit_card()),
            Channel::BankTransfer => Some(Self::bank_transfer()),
            Channel::QrPayment => Some(Self::qr_payment()),
            Channel::Other(_) => None,
        }
    }

    fn built_in(name: &str, rate: Decimal, fixed_fee: Decimal) -> Self {
        Self {
            name: name.to_string(),
            rate,
            fixed_fee,
        }
    }
}

impl PricingRule for RateRule {
    fn calculate_base(&self, amount: Decimal) -> Option<Decimal> {
        amount.checked_mul(self.rate)?.checked_add(self.fixed_fee)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn formula(&self) -> String {
        format!(
            "amount x {} + {}",
            format_rate(self.rate),
            format_money(self.fixed_fee)
        )
    }
}

/// Every built-in channel paired with its default rule.
pub fn default_rules() -> Vec<(Channel, PricingRuleRef)> {
    Channel::BUILT_IN
        .into_iter()
        .filter_map(|channel| {
            let rule = RateRule::for_channel(&channel)?;
            Some((channel, Arc::new(rule) as PricingRuleRef))
        })
        .collect()
}

/// A rule backed by an arbitrary pure function of the amount.
///
/// Lets hosts plug in pricing that is not percentage-plus-fee (flat fees,
/// caps, tiered schedules) without a new type.
pub struct FnRule {
    name: String,
    formula: String,
    calculate: Box<dyn Fn(Decimal) -> Decimal + Send + Sync>,
}

impl FnRule {
    pub fn new<F>(name: impl Into<String>, formula: impl Into<String>, calculate: F) -> Self
    where
        F: Fn(Decimal) -> Decimal + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            formula: formula.into(),
            calculate: Box::new(calculate),
        }
    }
}

impl fmt::Debug for FnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("name", &self.name)
            .field("formula", &self.formula)
            .finish_non_exhaustive()
    }
}

impl PricingRule for FnRule {
    fn calculate_base(&self, amount: Decimal) -> Option<Decimal> {
        Some((self.calculate)(amount))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn formula(&self) -> String {
        self.formula.clone()
    }
}
