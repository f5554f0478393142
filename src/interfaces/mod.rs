//! Batch host: CSV readers for transactions and merchants, CSV writer for
//! the resulting commissions.

pub mod csv;
