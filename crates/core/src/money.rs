//! # Money Module
//!
//! Rounding and parsing helpers on top of `rust_decimal::Decimal`.
//! Binary floating point never touches a monetary value in Depocalc.

use crate::error::{CoreError, CoreResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Fractional digits of every monetary output (total, profit).
pub const MONEY_SCALE: u32 = 2;

/// Fractional digits the monthly rate is carried at before compounding.
pub const RATE_SCALE: u32 = 10;

/// Fractional digits of the compounding multiplier between periods.
pub const WORKING_SCALE: u32 = 16;

/// Round half-up (away from zero) to `dp` fractional digits.
///
/// # Examples
/// ```
/// use depocalc_core::money::round_half_up;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_half_up(dec!(0.0070833333333), 10), dec!(0.0070833333));
/// assert_eq!(round_half_up(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_half_up(dec!(-2.5), 0), dec!(-3));
/// ```
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a monetary value to exactly [`MONEY_SCALE`] fractional digits.
///
/// Values that already have fewer digits are padded, so `1010` becomes
/// `1010.00` and always renders with two decimals.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = round_half_up(value, MONEY_SCALE);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Parse user-entered decimal text.
///
/// Surrounding whitespace is ignored and a comma is accepted as the decimal
/// separator (`"8,5"` parses as `8.5`).
pub fn parse_decimal(text: &str) -> CoreResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid_input("empty decimal value"));
    }

    let normalized = trimmed.replace(',', ".");
    Decimal::from_str(&normalized)
        .map_err(|_| CoreError::invalid_input(format!("not a decimal number: {:?}", text)))
}
