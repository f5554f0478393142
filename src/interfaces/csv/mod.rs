pub mod merchant_reader;
pub mod result_writer;
pub mod transaction_reader;
