//! # Deposit Module
//!
//! Input and result types for a fixed-term deposit calculation.
//!
//! - [`DepositRequest`]: wire shape, every field optional (missing or `null`).
//! - [`DepositInput`]: a complete, contract-checked input.
//! - [`DepositResult`]: total balance and profit, two fractional digits each.

use crate::error::{CoreError, CoreResult};
use crate::money::{round_money, MONEY_SCALE};
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deposit parameters as they arrive from a client.
///
/// Decimals deserialize from JSON strings (`"8.5"`) or numbers (`8.5`).
/// `months` accepts integers, integral floats (`12.0`) and integer strings
/// (`"12"`); it stays signed so range checks can report `-1` by field.
///
/// # Examples
/// ```
/// use depocalc_core::DepositRequest;
/// use rust_decimal_macros::dec;
///
/// let request = DepositRequest::new(dec!(100000), 12, dec!(8.5));
/// assert_eq!(request.months, Some(12));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositRequest {
    /// Principal, currency units
    pub amount: Option<Decimal>,
    /// Term in months
    #[serde(deserialize_with = "deserialize_months")]
    pub months: Option<i64>,
    /// Nominal annual rate in percent (`8.5` means 8.5%)
    pub rate: Option<Decimal>,
}

impl DepositRequest {
    /// Create a request with every field present
    pub fn new(amount: Decimal, months: u32, rate: Decimal) -> Self {
        Self {
            amount: Some(amount),
            months: Some(i64::from(months)),
            rate: Some(rate),
        }
    }

    /// Names of the fields that are absent, in declaration order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.amount.is_none() {
            missing.push("amount");
        }
        if self.months.is_none() {
            missing.push("months");
        }
        if self.rate.is_none() {
            missing.push("rate");
        }
        missing
    }
}

/// A complete deposit input.
///
/// # Invariant
/// `amount > 0` and `annual_rate_percent >= 0`. Range policy (minimum
/// deposit, maximum term, ...) is not checked here and values are never
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositInput {
    amount: Decimal,
    months: u32,
    annual_rate_percent: Decimal,
}

impl DepositInput {
    /// Create a new input, rejecting a non-positive amount or a negative rate.
    pub fn new(amount: Decimal, months: u32, annual_rate_percent: Decimal) -> CoreResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::invalid_input(format!(
                "amount must be positive: {}",
                amount
            )));
        }
        if annual_rate_percent < Decimal::ZERO {
            return Err(CoreError::invalid_input(format!(
                "rate must not be negative: {}",
                annual_rate_percent
            )));
        }

        Ok(Self {
            amount,
            months,
            annual_rate_percent,
        })
    }

    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[inline]
    pub fn months(&self) -> u32 {
        self.months
    }

    #[inline]
    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }
}

impl TryFrom<&DepositRequest> for DepositInput {
    type Error = CoreError;

    fn try_from(request: &DepositRequest) -> Result<Self, Self::Error> {
        match (request.amount, request.months, request.rate) {
            (Some(amount), Some(months), Some(rate)) => {
                let months = u32::try_from(months).map_err(|_| {
                    CoreError::invalid_input(format!("months out of range: {}", months))
                })?;
                Self::new(amount, months, rate)
            }
            _ => Err(CoreError::invalid_input(format!(
                "all fields must be filled in, missing: {}",
                request.missing_fields().join(", ")
            ))),
        }
    }
}

/// Terminal balance and accrued profit of a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositResult {
    /// Final balance, 2 fractional digits
    pub total: Decimal,
    /// `total - amount`, 2 fractional digits
    pub profit: Decimal,
}

impl DepositResult {
    /// Build a result from full-precision values.
    ///
    /// Both values are rounded independently, half-up, to two digits. A value
    /// too large to carry two fractional digits is an `Overflow`.
    pub fn new(total: Decimal, profit: Decimal) -> CoreResult<Self> {
        Ok(Self {
            total: money_value("total", total)?,
            profit: money_value("profit", profit)?,
        })
    }
}

fn money_value(name: &str, value: Decimal) -> CoreResult<Decimal> {
    let rounded = round_money(value);
    if rounded.scale() != MONEY_SCALE {
        return Err(CoreError::overflow(format!(
            "{} {} cannot carry {} fractional digits",
            name, value, MONEY_SCALE
        )));
    }
    Ok(rounded)
}

fn deserialize_months<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct MonthsVisitor;

    impl<'de> Visitor<'de> for MonthsVisitor {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a whole number of months")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(self)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v)
                .map(Some)
                .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            // 12.0 is a term, 12.5 is not
            if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 {
                Ok(Some(v as i64))
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_option(MonthsVisitor)
}

impl fmt::Display for DepositResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "total={} profit={}", self.total, self.profit)
    }
}
