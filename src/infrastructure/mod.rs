//! Adapters implementing the domain ports: the built-in pricing rules, the
//! rule registry and the default discount policy.

pub mod discount;
pub mod registry;
pub mod rules;
