#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use commission_engine::{Channel, Merchant, MerchantTier, Transaction};
use rust_decimal::Decimal;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub fn transaction(channel: Channel, amount: Decimal) -> Transaction {
    let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    Transaction::new("T1", amount, channel, "M1", timestamp)
}

pub fn merchant(tier: MerchantTier, monthly_volume: Decimal) -> Merchant {
    Merchant::new("M1", "Test Shop", tier, monthly_volume)
}

/// Writes a merchants CSV with one standard, one premium and one high-volume merchant.
pub fn merchants_csv() -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "id, name, tier, monthly_volume")?;
    writeln!(file, "M1, Corner Shop, standard, 5000")?;
    writeln!(file, "M2, Chain Store, premium, 8000")?;
    writeln!(file, "M3, Mega Mart, high-volume, 15000")?;
    writeln!(file, "M4, Wholesale, standard, 12000")?;
    file.flush()?;
    Ok(file)
}

/// Writes a transactions CSV from `(id, amount, channel, merchant)` rows.
pub fn transactions_csv(rows: &[(&str, &str, &str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "id, amount, channel, merchant_id, timestamp")?;
    for (id, amount, channel, merchant) in rows {
        writeln!(file, "{id}, {amount}, {channel}, {merchant}, 2024-03-01T09:00:00Z")?;
    }
    file.flush()?;
    Ok(file)
}
