//! Depocalc Core - Domain types
//!
//! This crate contains the fundamental types used across Depocalc:
//! - `DepositRequest` / `DepositInput` / `DepositResult`: deposit calculation I/O
//! - `money`: half-up rounding and decimal parsing on `rust_decimal::Decimal`
//! - `CoreError`: domain errors

pub mod deposit;
pub mod error;
pub mod money;

pub use deposit::{DepositInput, DepositRequest, DepositResult};
pub use error::{CoreError, CoreResult};
pub use money::{parse_decimal, round_half_up, round_money};
