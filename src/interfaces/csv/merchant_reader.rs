use crate::domain::merchant::Merchant;
use crate::error::BatchError;
use std::collections::HashMap;
use std::io::Read;

/// Reads merchants from a CSV source with header `id, name, tier, monthly_volume`.
pub struct MerchantReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MerchantReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn merchants(self) -> impl Iterator<Item = Result<Merchant, BatchError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BatchError::from))
    }

    /// Loads every merchant keyed by id. Fails on the first malformed row;
    /// later rows with a duplicate id replace earlier ones.
    pub fn into_map(self) -> Result<HashMap<String, Merchant>, BatchError> {
        self.merchants()
            .map(|merchant| merchant.map(|m| (m.id.clone(), m)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::merchant::MerchantTier;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_merchants() {
        let data = "id, name, tier, monthly_volume\n\
                    M1, Corner Shop, standard, 5000\n\
                    M2, Big Store, high-volume, 15000.50";
        let merchants = MerchantReader::new(data.as_bytes()).into_map().unwrap();

        assert_eq!(merchants.len(), 2);
        assert_eq!(merchants["M1"].tier, MerchantTier::Standard);
        assert_eq!(merchants["M2"].tier, MerchantTier::HighVolume);
        assert_eq!(merchants["M2"].monthly_volume, dec!(15000.50));
    }

    #[test]
    fn test_malformed_merchant_fails_load() {
        let data = "id, name, tier, monthly_volume\nM1, Corner Shop, standard, lots";
        assert!(MerchantReader::new(data.as_bytes()).into_map().is_err());
    }
}
