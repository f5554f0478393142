//! Numeric policy for monetary values.
//!
//! All amounts are `rust_decimal::Decimal`. Currency values are quantized to
//! cents using round-half-away-from-zero, never banker's rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Number of decimal places kept for currency amounts.
pub const CURRENCY_DP: u32 = 2;

/// Rounds a currency amount to cents, midpoints away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders a currency amount with exactly two decimals, e.g. `$3.10`.
pub fn format_money(value: Decimal) -> String {
    format!("${:.2}", round_money(value))
}

/// Renders a fractional rate as a percentage with one decimal, e.g. `0.028` as `2.8%`.
pub fn format_rate(rate: Decimal) -> String {
    let percent =
        (rate * dec!(100)).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", percent)
}
