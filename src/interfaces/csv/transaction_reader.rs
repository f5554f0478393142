use crate::domain::transaction::Transaction;
use crate::error::BatchError;
use std::io::Read;

/// Reads transactions from a CSV source.
///
/// Expected header: `id, amount, channel, merchant_id, timestamp`, with the
/// timestamp in RFC 3339. Whitespace around fields is trimmed.
pub struct TransactionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TransactionReader<R> {
    /// Creates a new `TransactionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes transactions.
    ///
    /// A malformed row yields an error for that row only; iteration continues.
    pub fn transactions(self) -> impl Iterator<Item = Result<Transaction, BatchError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BatchError::from))
    }
}
