//! Application layer containing the commission orchestration.
//!
//! This module defines the `CommissionEngine`, the entry point hosts call to
//! price a transaction. The engine is synchronous and does no I/O; every call
//! is independent of the previous ones.

pub mod engine;
