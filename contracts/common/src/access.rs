//! Automation Access Control
//!
//! Distribution of the accrued pool balance is restricted to a designated
//! automation caller. The restriction is modeled as an injected capability
//! checked explicitly before the guarded operation proceeds.

use crate::errors::{PoolError, PoolResult};
use crate::types::Address;

/// Capability guarding operator-only entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomationCapability {
    operator: Address,
}

impl AutomationCapability {
    /// Bind the capability to an operator address
    pub fn new(operator: Address) -> Self {
        Self { operator }
    }

    /// The bound operator address
    pub fn operator(&self) -> Address {
        self.operator
    }

    /// True iff `caller` holds the automation role
    pub fn is_operator(&self, caller: &Address) -> bool {
        *caller == self.operator
    }

    /// Fail with `Unauthorized` unless `caller` holds the automation role
    pub fn ensure(&self, caller: Address) -> PoolResult<()> {
        if caller != self.operator {
            return Err(PoolError::Unauthorized {
                expected: self.operator,
                actual: caller,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_passes() {
        let cap = AutomationCapability::new([1u8; 32]);
        assert!(cap.is_operator(&[1u8; 32]));
        assert!(cap.ensure([1u8; 32]).is_ok());
    }

    #[test]
    fn test_stranger_rejected() {
        let cap = AutomationCapability::new([1u8; 32]);
        assert!(!cap.is_operator(&[2u8; 32]));

        let result = cap.ensure([2u8; 32]);
        assert!(matches!(result, Err(PoolError::Unauthorized { .. })));
    }
}
