use super::channel::Channel;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment to be priced. Immutable once constructed.
///
/// `amount` is not validated here: the engine rejects non-positive amounts
/// so that callers get a distinct error instead of a zero commission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub channel: Channel,
    pub merchant_id: String,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        amount: Decimal,
        channel: Channel,
        merchant_id: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            channel,
            merchant_id: merchant_id.into(),
            timestamp,
        }
    }
}
