//! Deposit service - validate, then calculate
//!
//! `DepositService` is what a transport adapter (HTTP handler, CLI command)
//! talks to. `ErrorResponse` is the body such an adapter sends back on
//! failure.

use crate::error::{BusinessError, BusinessResult};
use crate::interest::InterestCalculator;
use crate::validation::DepositPolicy;
use depocalc_core::{DepositRequest, DepositResult};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Request pipeline: policy check followed by the interest calculation
#[derive(Debug, Clone, Default)]
pub struct DepositService {
    policy: DepositPolicy,
    calculator: InterestCalculator,
}

impl DepositService {
    pub fn new(policy: DepositPolicy, calculator: InterestCalculator) -> Self {
        Self { policy, calculator }
    }

    /// Validate a request and calculate its result
    pub fn handle(&self, request: &DepositRequest) -> BusinessResult<DepositResult> {
        let input = self.policy.validate(request).inspect_err(|err| {
            warn!(error = %err, "Deposit request rejected");
        })?;

        let result = self.calculator.compound(&input)?;

        info!(
            amount = %input.amount(),
            months = input.months(),
            rate = %input.annual_rate_percent(),
            total = %result.total,
            profit = %result.profit,
            "Deposit calculated"
        );

        Ok(result)
    }

    pub fn policy(&self) -> &DepositPolicy {
        &self.policy
    }

    pub fn calculator(&self) -> &InterestCalculator {
        &self.calculator
    }
}

/// Error body returned to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// HTTP-style status: 400 for client errors, 500 otherwise
    pub status: u16,
    pub message: String,
    /// Field name -> message, only for validation failures
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

impl ErrorResponse {
    pub const BAD_REQUEST: u16 = 400;
    pub const INTERNAL_ERROR: u16 = 500;
}

impl From<&BusinessError> for ErrorResponse {
    fn from(err: &BusinessError) -> Self {
        let status = if err.is_client_error() {
            Self::BAD_REQUEST
        } else {
            Self::INTERNAL_ERROR
        };

        let errors = err
            .validation_errors()
            .map(|v| {
                v.errors()
                    .iter()
                    .map(|e| (e.field.to_string(), e.message.clone()))
                    .collect()
            })
            .unwrap_or_default();

        // Core errors already describe themselves; skip the wrapper prefix
        let message = match err {
            BusinessError::Core(inner) => inner.to_string(),
            BusinessError::Validation(_) => err.to_string(),
        };

        Self {
            status,
            message,
            errors,
        }
    }
}
