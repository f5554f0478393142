use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Merchant classification driving discount eligibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MerchantTier {
    Standard,
    Premium,
    HighVolume,
    /// A tier this crate does not know about. Priced like `Standard`.
    Other(String),
}

impl MerchantTier {
    /// Whether the tier discount applies to this tier.
    pub fn is_discounted(&self) -> bool {
        matches!(self, Self::Premium | Self::HighVolume)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "Standard",
            Self::Premium => "Premium",
            Self::HighVolume => "HighVolume",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for MerchantTier {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        let key: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "standard" => Self::Standard,
            "premium" => Self::Premium,
            "highvolume" => Self::HighVolume,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for MerchantTier {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<MerchantTier> for String {
    fn from(tier: MerchantTier) -> Self {
        match tier {
            MerchantTier::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MerchantTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A merchant as supplied by the caller for a single calculation.
///
/// The engine only reads merchants; it never mutates or stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    pub id: String,
    pub name: String,
    pub tier: MerchantTier,
    /// Trailing monthly volume in the transaction's currency units.
    pub monthly_volume: Decimal,
}

impl Merchant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tier: MerchantTier,
        monthly_volume: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier,
            monthly_volume,
        }
    }
}
