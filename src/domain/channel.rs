use serde::{Deserialize, Serialize};
use std::fmt;

/// The payment method category of a transaction.
///
/// The four built-in channels have pricing rules out of the box; any other
/// name is carried as `Other` and only resolves once a rule is registered
/// for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Channel {
    CreditCard,
    DebitCard,
    BankTransfer,
    QrPayment,
    /// A channel without a built-in rule. Prefer `Channel::from` over building
    /// this directly; the registry normalizes it either way.
    Other(String),
}

impl Channel {
    /// All channels with a built-in pricing rule.
    pub const BUILT_IN: [Channel; 4] = [
        Channel::CreditCard,
        Channel::DebitCard,
        Channel::BankTransfer,
        Channel::QrPayment,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::CreditCard => "credit-card",
            Self::DebitCard => "debit-card",
            Self::BankTransfer => "bank-transfer",
            Self::QrPayment => "qr-payment",
            Self::Other(name) => name,
        }
    }

    /// The canonical form of this channel, as `Channel::from` would produce.
    ///
    /// `Other("credit-card")` becomes `CreditCard` and `Other("Wallet")`
    /// becomes `Other("wallet")`; every other value is returned unchanged.
    pub fn normalized(&self) -> Channel {
        match self {
            Self::Other(name) => Channel::from(name.as_str()),
            known => known.clone(),
        }
    }
}

impl From<&str> for Channel {
    /// Accepts `credit-card`, `credit_card`, `CreditCard`, `CREDIT CARD` and
    /// so on. Unknown names are lowercased so lookups are case-insensitive.
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        let key: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "creditcard" => Self::CreditCard,
            "debitcard" => Self::DebitCard,
            "banktransfer" => Self::BankTransfer,
            "qrpayment" | "qr" => Self::QrPayment,
            _ => Self::Other(trimmed.to_lowercase()),
        }
    }
}

impl From<String> for Channel {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Channel> for String {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
