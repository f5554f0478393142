//! Domain values and the ports the engine is written against.

pub mod channel;
pub mod commission;
pub mod merchant;
pub mod money;
pub mod ports;
pub mod transaction;
