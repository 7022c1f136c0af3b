//! Fund Transfer Interface
//!
//! Outbound payments of the base asset are an external concern. The pool
//! issues transfers synchronously through this interface; a failure aborts
//! (and rolls back) the operation that issued it.

use crate::errors::PoolResult;
use crate::types::Address;

/// Payout rail for refunding withdrawn principal.
pub trait FundTransfer {
    /// Send `amount` of the base asset to `to`.
    ///
    /// Implementations report an unrecoverable send as
    /// `PoolError::TransferFailed`.
    fn transfer(&mut self, to: Address, amount: u128) -> PoolResult<()>;
}
