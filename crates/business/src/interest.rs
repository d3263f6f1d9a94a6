//! Compound Interest Module
//!
//! Fixed-term deposit interest with monthly compounding.
//!
//! ```text
//! monthly_rate = round(round(rate / 100) / 12)        (rate scale)
//! multiplier   = (1 + monthly_rate) ^ months          (working scale, per step)
//! total        = amount * multiplier
//! profit       = total - amount
//! ```
//!
//! `total` and `profit` stay at full precision until both are rounded
//! half-up to two digits at the very end.

use depocalc_core::money::{round_half_up, RATE_SCALE, WORKING_SCALE};
use depocalc_core::{CoreError, CoreResult, DepositInput, DepositRequest, DepositResult};
use rust_decimal::Decimal;
use tracing::debug;

const PERCENT: Decimal = Decimal::ONE_HUNDRED;
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Longest term the calculator compounds (100 years)
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Deposit interest calculator
///
/// Holds only its precision settings, so one instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestCalculator {
    /// Fractional digits of the monthly rate
    rate_scale: u32,
    /// Fractional digits kept after every compounding step
    working_scale: u32,
}

impl InterestCalculator {
    /// Create a calculator with the default precision (10 / 16 digits)
    pub fn new() -> Self {
        Self {
            rate_scale: RATE_SCALE,
            working_scale: WORKING_SCALE,
        }
    }

    /// Create with custom intermediate precision
    pub fn with_precision(rate_scale: u32, working_scale: u32) -> Self {
        Self {
            rate_scale,
            working_scale,
        }
    }

    /// Calculate a deposit from a raw request.
    ///
    /// Fails fast with `InvalidInput` when any field is missing, so it stays
    /// safe to call without prior validation.
    pub fn calculate(&self, request: &DepositRequest) -> CoreResult<DepositResult> {
        let input = DepositInput::try_from(request)?;
        self.compound(&input)
    }

    /// Calculate total and profit for a complete input
    pub fn compound(&self, input: &DepositInput) -> CoreResult<DepositResult> {
        let monthly_rate = self.monthly_rate(input.annual_rate_percent());
        let multiplier = self.multiplier(monthly_rate, input.months())?;

        let amount = input.amount();
        let total = amount
            .checked_mul(multiplier)
            .ok_or_else(|| CoreError::overflow(format!("{} * {}", amount, multiplier)))?;
        let profit = total - amount;

        debug!(
            %amount,
            months = input.months(),
            rate = %input.annual_rate_percent(),
            %monthly_rate,
            %multiplier,
            "Compounded deposit"
        );

        DepositResult::new(total, profit)
    }

    /// Convert a nominal annual percentage into a monthly fraction.
    ///
    /// Both divisions round half-up to the rate scale.
    pub fn monthly_rate(&self, annual_rate_percent: Decimal) -> Decimal {
        let annual = round_half_up(annual_rate_percent / PERCENT, self.rate_scale);
        round_half_up(annual / MONTHS_PER_YEAR, self.rate_scale)
    }

    /// `(1 + monthly_rate) ^ months` by repeated multiplication.
    ///
    /// Every product is rounded half-up to the working scale; `months == 0`
    /// or a zero rate yields exactly one. Terms above [`MAX_TERM_MONTHS`] are
    /// `InvalidInput`.
    pub fn multiplier(&self, monthly_rate: Decimal, months: u32) -> CoreResult<Decimal> {
        if months > MAX_TERM_MONTHS {
            return Err(CoreError::invalid_input(format!(
                "term of {} months exceeds {} months",
                months, MAX_TERM_MONTHS
            )));
        }
        if monthly_rate.is_zero() {
            return Ok(Decimal::ONE);
        }

        let base = Decimal::ONE + monthly_rate;
        let mut acc = Decimal::ONE;

        for period in 0..months {
            let product = acc.checked_mul(base).ok_or_else(|| {
                CoreError::overflow(format!("({})^{} at period {}", base, months, period + 1))
            })?;
            acc = round_half_up(product, self.working_scale);
        }

        Ok(acc)
    }

    /// Get the monthly rate scale
    pub fn rate_scale(&self) -> u32 {
        self.rate_scale
    }

    /// Get the working scale
    pub fn working_scale(&self) -> u32 {
        self.working_scale
    }
}

impl Default for InterestCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn calc(amount: Decimal, months: u32, rate: Decimal) -> DepositResult {
        InterestCalculator::new()
            .compound(&DepositInput::new(amount, months, rate).unwrap())
            .unwrap()
    }

    #[test]
    fn test_monthly_rate() {
        let calc = InterestCalculator::new();

        assert_eq!(calc.monthly_rate(dec!(12)), dec!(0.01));
        assert_eq!(calc.monthly_rate(dec!(8.5)), dec!(0.0070833333));
        assert_eq!(calc.monthly_rate(dec!(1)), dec!(0.0008333333));
        assert_eq!(calc.monthly_rate(dec!(20)), dec!(0.0166666667));
    }

    #[test]
    fn test_multiplier_zero_months_is_one() {
        let calc = InterestCalculator::new();
        assert_eq!(calc.multiplier(dec!(0.01), 0).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_multiplier_exact_for_short_terms() {
        let calc = InterestCalculator::new();

        // 1.01^2 = 1.0201, 1.01^3 = 1.030301
        assert_eq!(calc.multiplier(dec!(0.01), 1).unwrap(), dec!(1.01));
        assert_eq!(calc.multiplier(dec!(0.01), 2).unwrap(), dec!(1.0201));
        assert_eq!(calc.multiplier(dec!(0.01), 3).unwrap(), dec!(1.030301));
    }

    #[test]
    fn test_multiplier_respects_working_scale() {
        let calc = InterestCalculator::new();
        let multiplier = calc.multiplier(dec!(0.0070833333), 12).unwrap();
        assert!(multiplier.scale() <= WORKING_SCALE);
        assert!(multiplier > dec!(1.0883) && multiplier < dec!(1.0884));
    }

    #[test]
    fn test_calculate_basic_example() {
        let result = calc(dec!(100000), 12, dec!(8.5));
        assert_eq!(result.total.to_string(), "108839.09");
        assert_eq!(result.profit.to_string(), "8839.09");
    }

    #[test]
    fn test_calculate_minimum_values() {
        let result = calc(dec!(1000), 1, dec!(1.0));
        assert_eq!(result.total.to_string(), "1000.83");
        assert_eq!(result.profit.to_string(), "0.83");
    }

    #[test]
    fn test_calculate_one_month() {
        // 1000 * (1 + 0.12/12) = 1010
        let result = calc(dec!(1000), 1, dec!(12.0));
        assert_eq!(result.total.to_string(), "1010.00");
        assert_eq!(result.profit.to_string(), "10.00");
    }

    #[test]
    fn test_calculate_zero_months() {
        let result = calc(dec!(1000), 0, dec!(12));
        assert_eq!(result.total.to_string(), "1000.00");
        assert_eq!(result.profit.to_string(), "0.00");
    }

    #[test]
    fn test_calculate_zero_rate() {
        let result = calc(dec!(5000), 24, dec!(0));
        assert_eq!(result.total, dec!(5000));
        assert_eq!(result.profit, Decimal::ZERO);
    }

    #[test]
    fn test_calculate_rejects_missing_fields() {
        let calc = InterestCalculator::new();
        let request = DepositRequest {
            amount: Some(dec!(100000)),
            months: Some(12),
            rate: None,
        };

        let err = calc.calculate(&request).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("rate"));
    }

    #[test]
    fn test_calculate_from_request() {
        let calc = InterestCalculator::new();
        let result = calc
            .calculate(&DepositRequest::new(dec!(100000), 12, dec!(8.5)))
            .unwrap();
        assert_eq!(result.total, dec!(108839.09));
    }

    #[test]
    fn test_custom_precision() {
        let calc = InterestCalculator::with_precision(12, 20);
        assert_eq!(calc.rate_scale(), 12);
        assert_eq!(calc.working_scale(), 20);
        assert_eq!(calc.monthly_rate(dec!(8.5)), dec!(0.007083333333));

        let result = calc
            .compound(&DepositInput::new(dec!(100000), 12, dec!(8.5)).unwrap())
            .unwrap();
        assert_eq!(result.total, dec!(108839.09));
    }

    #[test]
    fn test_multiplier_zero_rate_is_one() {
        let calc = InterestCalculator::new();
        assert_eq!(calc.multiplier(Decimal::ZERO, MAX_TERM_MONTHS).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_multiplier_term_ceiling() {
        let calc = InterestCalculator::new();
        assert!(calc.multiplier(dec!(0.01), MAX_TERM_MONTHS).is_ok());

        let err = calc.multiplier(dec!(0.01), MAX_TERM_MONTHS + 1).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_unbounded_term_rejected() {
        let calc = InterestCalculator::new();
        for rate in [dec!(0), dec!(5)] {
            let err = calc
                .calculate(&DepositRequest::new(dec!(1000), u32::MAX, rate))
                .unwrap_err();
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn test_total_without_two_digit_room_overflows() {
        // Fits the mantissa only after dropping fractional digits
        let calc = InterestCalculator::new();
        let input = DepositInput::new(dec!(1000000000000000000000000000), 1, dec!(1)).unwrap();
        let err = calc.compound(&input).unwrap_err();
        assert!(matches!(err, CoreError::Overflow(_)));
    }

    #[test]
    fn test_huge_amount_overflows_without_panic() {
        let calc = InterestCalculator::new();
        let input = DepositInput::new(Decimal::MAX, 12, dec!(20)).unwrap();
        let err = calc.compound(&input).unwrap_err();
        assert!(matches!(err, CoreError::Overflow(_)));
    }
}
