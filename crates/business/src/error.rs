//! Business layer errors

use crate::validation::ValidationErrors;
use depocalc_core::CoreError;
use thiserror::Error;

/// Business operation errors
#[derive(Debug, Error)]
pub enum BusinessError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

/// Result type alias for business operations
pub type BusinessResult<T> = Result<T, BusinessError>;

impl BusinessError {
    /// Field errors, if this is a validation failure
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Core(_) => None,
        }
    }

    /// Whether the caller sent something unusable (as opposed to an
    /// arithmetic limit being hit)
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Core(err) => err.is_invalid_input(),
        }
    }
}
