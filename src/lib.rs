pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::engine::CommissionEngine;
pub use domain::channel::Channel;
pub use domain::commission::CommissionResult;
pub use domain::merchant::{Merchant, MerchantTier};
pub use domain::ports::{DiscountPolicy, PricingRule, PricingRuleRef};
pub use domain::transaction::Transaction;
pub use error::CommissionError;
