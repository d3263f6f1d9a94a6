//! Deposit policy - field-level range validation
//!
//! The calculator accepts any positive input; the product limits a client
//! is allowed to request live here. Every field is checked so a client gets
//! all of its mistakes back at once.

use crate::error::{BusinessError, BusinessResult};
use depocalc_core::money::MONEY_SCALE;
use depocalc_core::{DepositInput, DepositRequest};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Minimum deposit: 1000.00
pub const MIN_AMOUNT: Decimal = Decimal::from_parts(100_000, 0, 0, false, 2);
/// Maximum deposit: 10 000 000.00
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 2);
pub const MIN_MONTHS: u32 = 1;
pub const MAX_MONTHS: u32 = 60;
/// Minimum annual rate: 1.00%
pub const MIN_RATE: Decimal = Decimal::from_parts(100, 0, 0, false, 2);
/// Maximum annual rate: 20.00%
pub const MAX_RATE: Decimal = Decimal::from_parts(2_000, 0, 0, false, 2);

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All field errors of one request, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Message for a field, if it was rejected
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Inclusive limits for a deposit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositPolicy {
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub min_months: u32,
    pub max_months: u32,
    pub min_rate: Decimal,
    pub max_rate: Decimal,
}

impl DepositPolicy {
    /// Check every field of `request` and build the calculator input.
    ///
    /// Out-of-range values are reported, never clamped.
    pub fn validate(&self, request: &DepositRequest) -> BusinessResult<DepositInput> {
        let mut errors = ValidationErrors::default();

        match request.amount {
            None => errors.push("amount", "Amount must not be empty"),
            Some(amount) if amount < self.min_amount => {
                errors.push("amount", format!("Minimum amount: {}", self.min_amount))
            }
            Some(amount) if amount > self.max_amount => {
                errors.push("amount", format!("Maximum amount: {}", self.max_amount))
            }
            Some(amount) if amount.normalize().scale() > MONEY_SCALE => errors.push(
                "amount",
                format!("Amount must have at most {} fractional digits", MONEY_SCALE),
            ),
            Some(_) => {}
        }

        match request.months {
            None => errors.push("months", "Term must not be empty"),
            Some(months) if months < i64::from(self.min_months) => {
                errors.push("months", format!("Minimum term: {} month(s)", self.min_months))
            }
            Some(months) if months > i64::from(self.max_months) => {
                errors.push("months", format!("Maximum term: {} month(s)", self.max_months))
            }
            Some(_) => {}
        }

        match request.rate {
            None => errors.push("rate", "Rate must not be empty"),
            Some(rate) if rate < self.min_rate => {
                errors.push("rate", format!("Minimum rate: {}%", self.min_rate))
            }
            Some(rate) if rate > self.max_rate => {
                errors.push("rate", format!("Maximum rate: {}%", self.max_rate))
            }
            Some(_) => {}
        }

        if !errors.is_empty() {
            return Err(BusinessError::Validation(errors));
        }

        Ok(DepositInput::try_from(request)?)
    }
}

impl Default for DepositPolicy {
    fn default() -> Self {
        Self {
            min_amount: MIN_AMOUNT,
            max_amount: MAX_AMOUNT,
            min_months: MIN_MONTHS,
            max_months: MAX_MONTHS,
            min_rate: MIN_RATE,
            max_rate: MAX_RATE,
        }
    }
}
