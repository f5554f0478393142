use crate::domain::channel::Channel;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while registering rules or computing a commission.
///
/// Every variant is a deterministic validation failure: none of them is
/// transient, so callers should report them rather than retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommissionError {
    #[error("transaction record is missing")]
    MissingTransaction,
    #[error("merchant record is missing")]
    MissingMerchant,
    #[error("transaction amount must be positive, got {0}")]
    InvalidAmount(Decimal),
    #[error("merchant monthly volume must not be negative, got {0}")]
    InvalidVolume(Decimal),
    #[error("no pricing rule registered for channel '{0}'")]
    UnsupportedChannel(Channel),
    #[error("invalid pricing rule: {0}")]
    InvalidRule(String),
    #[error("rule '{rule}' overflowed pricing amount {amount}")]
    Overflow { rule: String, amount: Decimal },
}

impl CommissionError {
    /// Message suitable for showing to the end user of a host application.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingTransaction => "no transaction was supplied",
            Self::MissingMerchant => "merchant not found",
            Self::InvalidAmount(_) => "the transaction amount must be greater than zero",
            Self::InvalidVolume(_) => "the merchant's monthly volume is invalid",
            Self::UnsupportedChannel(_) => "payment method not supported",
            Self::InvalidRule(_) => "the pricing rule configuration is invalid",
            Self::Overflow { .. } => "the amount is too large to price",
        }
    }
}

/// Errors of the batch host (CSV input/output and configuration loading).
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Commission(#[from] CommissionError),
}

pub type Result<T> = std::result::Result<T, CommissionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_user_messages_are_distinct() {
        let errors = [
            CommissionError::MissingTransaction,
            CommissionError::MissingMerchant,
            CommissionError::InvalidAmount(dec!(0)),
            CommissionError::InvalidVolume(dec!(-1)),
            CommissionError::UnsupportedChannel(Channel::from("cryptocurrency")),
            CommissionError::InvalidRule("empty name".to_string()),
            CommissionError::Overflow {
                rule: "Steep".to_string(),
                amount: Decimal::MAX,
            },
        ];
        let mut messages: Vec<&str> = errors.iter().map(|e| e.user_message()).collect();
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), errors.len());
    }

    #[test]
    fn test_unsupported_channel_display() {
        let err = CommissionError::UnsupportedChannel(Channel::from("Cryptocurrency"));
        assert_eq!(
            err.to_string(),
            "no pricing rule registered for channel 'cryptocurrency'"
        );
        assert_eq!(err.user_message(), "payment method not supported");
    }

    #[test]
    fn test_batch_error_wraps_commission_error() {
        let err: BatchError = CommissionError::MissingMerchant.into();
        assert!(matches!(
            err,
            BatchError::Commission(CommissionError::MissingMerchant)
        ));
        assert_eq!(err.to_string(), "merchant record is missing");
    }
}
