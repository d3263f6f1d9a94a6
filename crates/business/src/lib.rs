//! # Depocalc Business
//!
//! Business logic layer - compound interest, deposit policy, request pipeline.

pub mod error;
pub mod interest;
pub mod service;
pub mod validation;

pub use error::{BusinessError, BusinessResult};
pub use interest::InterestCalculator;
pub use service::{DepositService, ErrorResponse};
pub use validation::{DepositPolicy, FieldError, ValidationErrors};
