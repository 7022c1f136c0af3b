//! Core Types for the Prizepool Protocol
//!
//! Fundamental data structures shared across the protocol crates.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::interest;

/// Type alias for addresses (32-byte hash)
pub type Address = [u8; 32];

// ============ Account Types ============

/// Per-user accounting record, created on first deposit.
///
/// The account exists only while the user holds a nonzero principal; a
/// withdrawal that empties it removes it entirely.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct UserAccount {
    /// Principal currently deposited, in base units
    pub amount_deposited: u128,
    /// True iff the address is currently in the participant registry
    pub is_participant: bool,
}

impl UserAccount {
    /// Create an account for a first-time depositor
    pub fn new(amount_deposited: u128) -> Self {
        Self {
            amount_deposited,
            is_participant: true,
        }
    }
}

// ============ Pool State ============

/// Global pool accounting state.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct PoolState {
    /// Sum of all users' principal currently deposited.
    /// Invariant: equals the sum of `amount_deposited` over all accounts.
    pub total_deposits: u128,
    /// Accrued interest not yet distributed. Monotonic non-decreasing
    /// until distribution.
    pub pool_balance: u128,
    /// Last time accrual ran. Never decreases.
    pub last_accrued: u64,
    /// Per-second interest rate scaled by `PRECISION_FACTOR`; fixed at
    /// construction.
    pub interest_rate_per_second: u128,
}

impl PoolState {
    /// Creates initial pool state at the given timestamp
    pub fn new(interest_rate_per_second: u128, now: u64) -> Self {
        Self {
            total_deposits: 0,
            pool_balance: 0,
            last_accrued: now,
            interest_rate_per_second,
        }
    }
}

// ============ Configuration ============

/// Construction-time pool configuration.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct PoolConfig {
    /// Per-second interest rate scaled by `PRECISION_FACTOR`
    pub interest_rate_per_second: u128,
    /// Only address allowed to trigger distribution
    pub automation_operator: Address,
}

impl PoolConfig {
    /// Config with the default interest rate
    pub fn new(automation_operator: Address) -> Self {
        Self {
            interest_rate_per_second: interest::RATE_PER_SECOND,
            automation_operator,
        }
    }

    /// Override the interest rate
    pub fn with_rate(mut self, interest_rate_per_second: u128) -> Self {
        self.interest_rate_per_second = interest_rate_per_second;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pool_state() {
        let state = PoolState::new(interest::RATE_PER_SECOND, 1_700_000_000);
        assert_eq!(state.total_deposits, 0);
        assert_eq!(state.pool_balance, 0);
        assert_eq!(state.last_accrued, 1_700_000_000);
        assert_eq!(state.interest_rate_per_second, interest::RATE_PER_SECOND);
    }

    #[test]
    fn test_config_defaults() {
        let config = PoolConfig::new([7u8; 32]);
        assert_eq!(config.interest_rate_per_second, interest::RATE_PER_SECOND);
        assert_eq!(config.automation_operator, [7u8; 32]);

        let custom = PoolConfig::new([7u8; 32]).with_rate(1_000);
        assert_eq!(custom.interest_rate_per_second, 1_000);
    }

    #[test]
    fn test_state_serialization() {
        let state = PoolState::new(interest::RATE_PER_SECOND, 42);
        let bytes = borsh::to_vec(&state).unwrap();
        let restored: PoolState = borsh::from_slice(&bytes).unwrap();
        assert_eq!(state, restored);
    }
}
