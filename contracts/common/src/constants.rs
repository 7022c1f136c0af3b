//! Protocol Constants
//!
//! All magic numbers and configuration values for the prizepool protocol.

/// Receipt token metadata
pub mod token {
    /// Token name
    pub const NAME: &str = "Prizepool Share";
    /// Token symbol
    pub const SYMBOL: &str = "PPS";
    /// Decimal places (same as the base asset)
    pub const DECIMALS: u8 = 18;
    /// One unit with decimals (1 share = 10^18 base units)
    pub const ONE: u128 = 1_000_000_000_000_000_000;
}

/// Precision constants
pub mod precision {
    /// Fixed-point scaling factor for fractional rates (1e18)
    pub const PRECISION_FACTOR: u128 = 1_000_000_000_000_000_000;
}

/// Interest accrual configuration
pub mod interest {
    /// Default per-second interest rate, scaled by `PRECISION_FACTOR`
    pub const RATE_PER_SECOND: u128 = 50_000_000_000;

    /// Seconds per day, for accrual math in tests
    pub const SECONDS_PER_DAY: u64 = 86_400;
}
