//! # Error Module
//!
//! Domain errors for Depocalc core, built on thiserror.

use thiserror::Error;

/// Core domain errors.
///
/// Every variant is a caller error surfaced synchronously; nothing here is
/// transient or worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Missing, null, non-numeric or contract-violating input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Decimal arithmetic left the representable range.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

/// Result type alias với CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Create an overflow error
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow(operation.into())
    }

    /// Kiểm tra có phải lỗi invalid input không
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_input("missing fields: amount, rate");
        assert_eq!(err.to_string(), "Invalid input: missing fields: amount, rate");

        let err = CoreError::overflow("amount * multiplier");
        assert_eq!(err.to_string(), "Arithmetic overflow: amount * multiplier");
    }

    #[test]
    fn test_error_checks() {
        assert!(CoreError::invalid_input("x").is_invalid_input());
        assert!(!CoreError::overflow("x").is_invalid_input());
    }
}
