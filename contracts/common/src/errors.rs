//! Error Types for the Prizepool Protocol
//!
//! Typed errors with stable codes for logging and indexing. Every failure
//! surfaces to the caller with its specific kind, never a generic one.

/// Result type alias for prizepool operations
pub type PoolResult<T> = Result<T, PoolError>;

/// Main error enum for all prizepool protocol errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    // ============ Deposit/Withdraw Errors ============
    /// Operation carried no funds
    ZeroValue,

    /// Address has no active deposit
    NotParticipant { user: [u8; 32] },

    /// Withdrawal amount greater than principal on record
    ExceedsBalance { available: u128, requested: u128 },

    /// Refund of withdrawn funds could not be completed
    TransferFailed { to: [u8; 32], amount: u128 },

    // ============ Token Errors ============
    /// Receipt balance insufficient for the requested burn
    InsufficientBalance { available: u128, requested: u128 },

    /// Zero amount not allowed for mint/burn
    ZeroAmount,

    /// Mint not authorized
    MintUnauthorized { caller: [u8; 32] },

    /// Burn not authorized
    BurnUnauthorized { caller: [u8; 32] },

    // ============ Authorization Errors ============
    /// Caller does not hold the required capability
    Unauthorized { expected: [u8; 32], actual: [u8; 32] },

    // ============ Math Errors ============
    /// Arithmetic overflow occurred
    Overflow,

    /// Arithmetic underflow occurred
    Underflow,
}

impl PoolError {
    /// Returns a stable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZeroValue => "E001_ZERO_VALUE",
            Self::NotParticipant { .. } => "E002_NOT_PARTICIPANT",
            Self::ExceedsBalance { .. } => "E003_EXCEEDS_BALANCE",
            Self::TransferFailed { .. } => "E004_TRANSFER_FAILED",
            Self::InsufficientBalance { .. } => "E010_INSUFFICIENT_BALANCE",
            Self::ZeroAmount => "E011_ZERO_AMOUNT",
            Self::MintUnauthorized { .. } => "E020_MINT_UNAUTH",
            Self::BurnUnauthorized { .. } => "E021_BURN_UNAUTH",
            Self::Unauthorized { .. } => "E022_UNAUTHORIZED",
            Self::Overflow => "E030_OVERFLOW",
            Self::Underflow => "E031_UNDERFLOW",
        }
    }

    /// Returns true if this error is recoverable (the caller can fix it)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ExceedsBalance { .. } => true,      // Lower the amount
            Self::InsufficientBalance { .. } => true, // Lower the amount
            Self::TransferFailed { .. } => true,      // Retry the refund
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_error_codes_unique() {
        let errors = [
            PoolError::ZeroValue,
            PoolError::NotParticipant { user: [0u8; 32] },
            PoolError::ExceedsBalance {
                available: 100,
                requested: 200,
            },
            PoolError::TransferFailed {
                to: [0u8; 32],
                amount: 100,
            },
            PoolError::InsufficientBalance {
                available: 100,
                requested: 200,
            },
            PoolError::ZeroAmount,
            PoolError::MintUnauthorized { caller: [0u8; 32] },
            PoolError::BurnUnauthorized { caller: [0u8; 32] },
            PoolError::Unauthorized {
                expected: [0u8; 32],
                actual: [1u8; 32],
            },
            PoolError::Overflow,
            PoolError::Underflow,
        ];

        let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        let unique: BTreeSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), unique.len(), "Error codes must be unique");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(PoolError::ExceedsBalance {
            available: 1,
            requested: 2
        }
        .is_recoverable());
        assert!(PoolError::TransferFailed {
            to: [0u8; 32],
            amount: 1
        }
        .is_recoverable());
        assert!(!PoolError::ZeroValue.is_recoverable());
        assert!(!PoolError::Overflow.is_recoverable());
    }
}
