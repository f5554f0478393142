use crate::domain::channel::Channel;
use crate::domain::commission::CommissionResult;
use crate::domain::transaction::Transaction;
use crate::error::BatchError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// One output row: the priced transaction and its commission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionRecord {
    pub transaction: String,
    pub merchant: String,
    pub channel: Channel,
    pub amount: Decimal,
    pub base_commission: Decimal,
    pub discount_amount: Decimal,
    pub final_commission: Decimal,
    pub calculation_detail: String,
}

impl CommissionRecord {
    pub fn new(transaction: &Transaction, result: CommissionResult) -> Self {
        Self {
            transaction: transaction.id.clone(),
            merchant: transaction.merchant_id.clone(),
            channel: transaction.channel.clone(),
            amount: transaction.amount,
            base_commission: result.base_commission,
            discount_amount: result.discount_amount,
            final_commission: result.final_commission,
            calculation_detail: result.calculation_detail,
        }
    }
}

/// Writes commission records as CSV with a header row.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_records(
        &mut self,
        records: impl IntoIterator<Item = CommissionRecord>,
    ) -> Result<(), BatchError> {
        for record in records {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_records() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let tx = Transaction::new("T1", dec!(100.00), Channel::CreditCard, "M1", timestamp);
        let result = CommissionResult {
            base_commission: dec!(3.10),
            discount_amount: dec!(0.00),
            final_commission: dec!(3.10),
            calculation_detail: "Rule: Credit Card".to_string(),
        };

        let mut out = Vec::new();
        ResultWriter::new(&mut out)
            .write_records([CommissionRecord::new(&tx, result)])
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(
                "transaction,merchant,channel,amount,base_commission,discount_amount,final_commission,calculation_detail"
            )
        );
        assert_eq!(
            lines.next(),
            Some("T1,M1,credit-card,100.00,3.10,0.00,3.10,Rule: Credit Card")
        );
    }
}
