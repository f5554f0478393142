use crate::config::EngineConfig;
use crate::domain::channel::Channel;
use crate::domain::commission::{AppliedDiscount, CommissionResult};
use crate::domain::merchant::Merchant;
use crate::domain::money::{format_money, format_rate, round_money};
use crate::domain::ports::{DiscountPolicyBox, PricingRule, PricingRuleRef};
use crate::domain::transaction::Transaction;
use crate::error::{CommissionError, Result};
use crate::infrastructure::discount::TierVolumePolicy;
use crate::infrastructure::registry::RuleRegistry;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// The main entry point for pricing transactions.
///
/// `CommissionEngine` resolves the pricing rule for a transaction's channel,
/// computes the base commission, applies the discount policy and renders an
/// audit trail. It owns exactly one [`RuleRegistry`]; rules may be registered
/// through `&self` while other threads are calculating.
pub struct CommissionEngine {
    registry: RuleRegistry,
    policy: DiscountPolicyBox,
}

impl Default for CommissionEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl CommissionEngine {
    /// Creates an engine from an explicit registry and discount policy.
    pub fn with_policy(registry: RuleRegistry, policy: DiscountPolicyBox) -> Self {
        Self { registry, policy }
    }

    /// Engine with the built-in rules and the default tier/volume discounts.
    pub fn standard() -> Self {
        Self::with_policy(
            RuleRegistry::with_defaults(),
            Box::new(TierVolumePolicy::default()),
        )
    }

    /// Engine with the built-in rules overridden (or extended) by `overrides`.
    pub fn custom<I>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Channel, PricingRuleRef)>,
    {
        let engine = Self::standard();
        for (channel, rule) in overrides {
            engine.register_strategy(channel, rule)?;
        }
        Ok(engine)
    }

    /// Engine built from a loaded [`EngineConfig`].
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let registry = RuleRegistry::with_defaults();
        for (channel, rule) in config.rule_overrides()? {
            registry.register(channel, rule)?;
        }
        let policy = TierVolumePolicy::new(config.discounts)?;
        Ok(Self::with_policy(registry, Box::new(policy)))
    }

    /// Validates that both records are present, then calculates.
    ///
    /// Intended for hosts that look records up by id and may come back empty.
    pub fn calculate_commission(
        &self,
        transaction: Option<&Transaction>,
        merchant: Option<&Merchant>,
    ) -> Result<CommissionResult> {
        let transaction = transaction.ok_or(CommissionError::MissingTransaction)?;
        let merchant = merchant.ok_or(CommissionError::MissingMerchant)?;
        self.calculate(transaction, merchant)
    }

    /// Calculates the commission for `transaction` charged to `merchant`.
    ///
    /// Validation happens before any rule is looked up: the amount must be
    /// positive and the merchant volume must not be negative. A rule whose
    /// base overflows or comes out negative is reported, not priced.
    pub fn calculate(
        &self,
        transaction: &Transaction,
        merchant: &Merchant,
    ) -> Result<CommissionResult> {
        if transaction.amount <= Decimal::ZERO {
            return Err(CommissionError::InvalidAmount(transaction.amount));
        }
        if merchant.monthly_volume < Decimal::ZERO {
            return Err(CommissionError::InvalidVolume(merchant.monthly_volume));
        }

        let rule = self.registry.resolve(&transaction.channel)?;
        let raw_base = rule
            .calculate_base(transaction.amount)
            .ok_or_else(|| CommissionError::Overflow {
                rule: rule.name().to_string(),
                amount: transaction.amount,
            })?;
        let base_commission = round_money(raw_base);
        if base_commission < Decimal::ZERO {
            return Err(CommissionError::InvalidRule(format!(
                "rule '{}' produced a negative base commission {}",
                rule.name(),
                base_commission
            )));
        }
        let applied = self.policy.apply(base_commission, merchant);

        let calculation_detail =
            render_trail(rule.as_ref(), transaction, merchant, base_commission, &applied);

        debug!(
            transaction = %transaction.id,
            channel = %transaction.channel,
            rule = %rule.name(),
            base = %base_commission,
            final_commission = %applied.discounted,
            "commission calculated"
        );

        Ok(CommissionResult {
            base_commission,
            discount_amount: applied.discount_amount,
            final_commission: applied.discounted,
            calculation_detail,
        })
    }

    /// Registers or replaces the rule for `channel`.
    pub fn register_strategy(&self, channel: Channel, rule: PricingRuleRef) -> Result<()> {
        self.registry.register(channel, rule)
    }

    /// Snapshot of the registered channels and their rule names.
    pub fn list_registered(&self) -> BTreeMap<Channel, String> {
        self.registry.list_registered()
    }
}

fn render_trail(
    rule: &dyn PricingRule,
    transaction: &Transaction,
    merchant: &Merchant,
    base_commission: Decimal,
    applied: &AppliedDiscount,
) -> String {
    let mut discounts = Vec::new();
    if let Some(fraction) = applied.tier_discount {
        discounts.push(format!("{} tier -{}", merchant.tier, format_rate(fraction)));
    }
    if let Some(fraction) = applied.volume_discount {
        discounts.push(format!(
            "monthly volume over {} -{}",
            format_money(applied.volume_threshold),
            format_rate(fraction)
        ));
    }
    let discounts = if discounts.is_empty() {
        "none".to_string()
    } else {
        format!(
            "{} (total {})",
            discounts.join(", "),
            format_money(applied.discount_amount)
        )
    };

    format!(
        "Rule: {} [{}]; Amount: {}; Base commission: {}; Discounts: {}; Final commission: {}",
        rule.name(),
        rule.formula(),
        format_money(transaction.amount),
        format_money(base_commission),
        discounts,
        format_money(applied.discounted),
    )
}
