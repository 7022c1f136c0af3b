//! Mathematical Utilities for the Prizepool Protocol
//!
//! Safe math operations and the time-weighted interest calculation.

use crate::constants::precision::PRECISION_FACTOR;
use crate::errors::{PoolError, PoolResult};

/// Calculate simple interest accrued over an elapsed interval
///
/// `interest = total_deposits * rate_per_second * elapsed / PRECISION_FACTOR`
///
/// The division floors; truncated dust is accepted and never rounded up.
/// The product is computed with checked `u128` multiplication because
/// `total_deposits` and `rate_per_second` are independently large.
///
/// # Arguments
/// * `total_deposits` - Aggregate principal in base units
/// * `rate_per_second` - Per-second rate scaled by `PRECISION_FACTOR`
/// * `elapsed` - Seconds since the last accrual
pub fn accrued_interest(
    total_deposits: u128,
    rate_per_second: u128,
    elapsed: u64,
) -> PoolResult<u128> {
    if total_deposits == 0 || rate_per_second == 0 || elapsed == 0 {
        return Ok(0);
    }

    let interest = total_deposits
        .checked_mul(rate_per_second)
        .ok_or(PoolError::Overflow)?
        .checked_mul(elapsed as u128)
        .ok_or(PoolError::Overflow)?
        / PRECISION_FACTOR; // Safe: PRECISION_FACTOR is a constant > 0

    Ok(interest)
}

/// Safe addition with overflow check
pub fn safe_add(a: u128, b: u128) -> PoolResult<u128> {
    a.checked_add(b).ok_or(PoolError::Overflow)
}

/// Safe subtraction with underflow check
pub fn safe_sub(a: u128, b: u128) -> PoolResult<u128> {
    a.checked_sub(b).ok_or(PoolError::Underflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::interest::{RATE_PER_SECOND, SECONDS_PER_DAY};
    use crate::constants::token::ONE;

    #[test]
    fn test_one_day_accrual() {
        // 1e18 deposited for 86,400 s at rate 5e10:
        // 1e18 * 5e10 * 86400 / 1e18 = 4.32e15
        let interest = accrued_interest(ONE, RATE_PER_SECOND, SECONDS_PER_DAY).unwrap();
        assert_eq!(interest, 4_320_000_000_000_000);
    }

    #[test]
    fn test_zero_inputs_accrue_nothing() {
        assert_eq!(accrued_interest(0, RATE_PER_SECOND, 100).unwrap(), 0);
        assert_eq!(accrued_interest(ONE, 0, 100).unwrap(), 0);
        assert_eq!(accrued_interest(ONE, RATE_PER_SECOND, 0).unwrap(), 0);
    }

    #[test]
    fn test_truncation_floors() {
        // 1 base unit for 1 s at rate 5e10: 5e10 / 1e18 truncates to 0
        assert_eq!(accrued_interest(1, RATE_PER_SECOND, 1).unwrap(), 0);

        // 3 * 0.5 = 1.5 units of interest floors to 1
        assert_eq!(accrued_interest(3, PRECISION_FACTOR / 2, 1).unwrap(), 1);
    }

    #[test]
    fn test_scales_linearly_with_time() {
        let one_hour = accrued_interest(1_000 * ONE, RATE_PER_SECOND, 3_600).unwrap();
        let two_hours = accrued_interest(1_000 * ONE, RATE_PER_SECOND, 7_200).unwrap();
        assert_eq!(two_hours, 2 * one_hour);
    }

    #[test]
    fn test_overflow_surfaces_as_error() {
        let result = accrued_interest(u128::MAX, RATE_PER_SECOND, 1);
        assert!(matches!(result, Err(PoolError::Overflow)));
    }

    #[test]
    fn test_safe_ops() {
        assert_eq!(safe_add(1, 2).unwrap(), 3);
        assert!(matches!(safe_add(u128::MAX, 1), Err(PoolError::Overflow)));
        assert_eq!(safe_sub(3, 2).unwrap(), 1);
        assert!(matches!(safe_sub(2, 3), Err(PoolError::Underflow)));
    }
}
