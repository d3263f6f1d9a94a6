//! `calculate` command - deposit from command-line flags

use anyhow::{Context, Result};
use depocalc_business::{BusinessError, DepositService, ErrorResponse};
use depocalc_core::{DepositRequest, DepositResult};
use rust_decimal::Decimal;
use std::process::ExitCode;

use crate::OutputFormat;

/// Run the calculation and print the outcome
pub fn run(
    service: &DepositService,
    amount: Decimal,
    months: u32,
    rate: Decimal,
    format: OutputFormat,
) -> Result<ExitCode> {
    let request = DepositRequest::new(amount, months, rate);

    match service.handle(&request) {
        Ok(result) => {
            println!("{}", render_result(&result, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            match format {
                OutputFormat::Json => println!("{}", render_error(&err, format)?),
                OutputFormat::Text => eprintln!("{}", render_error(&err, format)?),
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Render a successful result
pub fn render_result(result: &DepositResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Total:  {}\nProfit: {}",
            result.total, result.profit
        )),
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("Failed to serialize result")
        }
    }
}

/// Render a failure, one line per rejected field in text mode
pub fn render_error(err: &BusinessError, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let Some(errors) = err.validation_errors() else {
                return Ok(format!("Error: {}", err));
            };
            let mut out = String::from("Error: validation failed");
            for e in errors.errors() {
                out.push_str(&format!("\n  {}: {}", e.field, e.message));
            }
            Ok(out)
        }
        OutputFormat::Json => serde_json::to_string_pretty(&ErrorResponse::from(err))
            .context("Failed to serialize error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_text() {
        let result = DepositResult::new(dec!(108839.0890588), dec!(8839.0890588)).unwrap();
        assert_eq!(
            render_result(&result, OutputFormat::Text).unwrap(),
            "Total:  108839.09\nProfit: 8839.09"
        );
    }

    #[test]
    fn test_render_json() {
        let result = DepositResult::new(dec!(1010), dec!(10)).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render_result(&result, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["total"], "1010.00");
        assert_eq!(json["profit"], "10.00");
    }

    #[test]
    fn test_render_validation_error_text() {
        let err = DepositService::default()
            .handle(&DepositRequest::new(dec!(100), 72, dec!(8.5)))
            .unwrap_err();
        assert_eq!(
            render_error(&err, OutputFormat::Text).unwrap(),
            "Error: validation failed\n  amount: Minimum amount: 1000.00\n  months: Maximum term: 60 month(s)"
        );
    }

    #[test]
    fn test_render_validation_error_json() {
        let err = DepositService::default()
            .handle(&DepositRequest::new(dec!(1000), 12, dec!(25)))
            .unwrap_err();
        let json: serde_json::Value =
            serde_json::from_str(&render_error(&err, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["status"], 400);
        assert_eq!(json["errors"]["rate"], "Maximum rate: 20.00%");
    }
}
