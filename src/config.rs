//! Engine configuration loaded from JSON.
//!
//! The library needs no configuration to run; this exists for hosts that want
//! to override rules or discount factors without recompiling.
//!
//! ```json
//! {
//!   "rules": { "wallet": { "name": "Wallet", "rate": "0.015", "fixed_fee": "0.20" } },
//!   "discounts": { "tier_factor": "0.75" }
//! }
//! ```

use crate::domain::channel::Channel;
use crate::domain::ports::PricingRuleRef;
use crate::error::{BatchError, CommissionError, Result};
use crate::infrastructure::discount::DiscountConfig;
use crate::infrastructure::rules::RateRule;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// A percentage-plus-fee rule as written in configuration.
///
/// Fields are optional so that an incomplete entry is reported as an invalid
/// rule rather than a JSON syntax error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub name: Option<String>,
    pub rate: Option<Decimal>,
    pub fixed_fee: Option<Decimal>,
}

impl RuleSpec {
    pub fn into_rule(self, channel: &Channel) -> Result<RateRule> {
        let rate = self.rate.ok_or_else(|| {
            CommissionError::InvalidRule(format!("rule for '{channel}' is missing a rate"))
        })?;
        let fixed_fee = self.fixed_fee.ok_or_else(|| {
            CommissionError::InvalidRule(format!("rule for '{channel}' is missing a fixed_fee"))
        })?;
        let name = self.name.unwrap_or_else(|| channel.to_string());
        RateRule::new(name, rate, fixed_fee)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Channel name to rule, applied on top of the built-in rules.
    pub rules: BTreeMap<String, RuleSpec>,
    pub discounts: DiscountConfig,
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> std::result::Result<Self, BatchError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> std::result::Result<Self, BatchError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Builds the rule overrides declared in `rules`.
    pub fn rule_overrides(&self) -> Result<Vec<(Channel, PricingRuleRef)>> {
        self.rules
            .iter()
            .map(|(name, spec)| {
                let channel = Channel::from(name.as_str());
                let rule = spec.clone().into_rule(&channel)?;
                Ok((channel, Arc::new(rule) as PricingRuleRef))
            })
            .collect()
    }
}
