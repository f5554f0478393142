use super::rules::default_rules;
use crate::domain::channel::Channel;
use crate::domain::ports::PricingRuleRef;
use crate::error::{CommissionError, Result};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use tracing::info;

/// A thread-safe mapping from payment channel to pricing rule.
///
/// Uses `RwLock<HashMap<Channel, PricingRuleRef>>`: lookups share the read
/// lock, registrations take the write lock, so a `resolve` sees the mapping
/// either before or after a concurrent `register`, never in between.
#[derive(Default)]
pub struct RuleRegistry {
    rules: RwLock<HashMap<Channel, PricingRuleRef>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in rule for every built-in channel.
    pub fn with_defaults() -> Self {
        Self {
            rules: RwLock::new(default_rules().into_iter().collect()),
        }
    }

    /// Inserts or replaces the rule for `channel`.
    ///
    /// Replacement is total: the previous rule is dropped, nothing is merged.
    /// The channel is stored in its normalized form.
    pub fn register(&self, channel: Channel, rule: PricingRuleRef) -> Result<()> {
        let channel = channel.normalized();
        if rule.name().trim().is_empty() {
            return Err(CommissionError::InvalidRule(format!(
                "rule for channel '{channel}' has no name"
            )));
        }
        let name = rule.name().to_string();
        let previous = self.rules.write().insert(channel.clone(), rule);
        match previous {
            Some(old) => info!(%channel, rule = %name, replaced = %old.name(), "pricing rule replaced"),
            None => info!(%channel, rule = %name, "pricing rule registered"),
        }
        Ok(())
    }

    /// Returns the rule registered for `channel`.
    pub fn resolve(&self, channel: &Channel) -> Result<PricingRuleRef> {
        let channel = channel.normalized();
        self.rules
            .read()
            .get(&channel)
            .cloned()
            .ok_or(CommissionError::UnsupportedChannel(channel))
    }

    /// Snapshot of channel to rule name, ordered by channel.
    pub fn list_registered(&self) -> BTreeMap<Channel, String> {
        self.rules
            .read()
            .iter()
            .map(|(channel, rule)| (channel.clone(), rule.name().to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}
