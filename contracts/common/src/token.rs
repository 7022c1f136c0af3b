//! Receipt Token Interface
//!
//! The pool tracks principal; receipt tokens live in an external,
//! independently owned ledger reached only through this interface. The 1:1
//! peg between deposited principal and receipt balance is an invariant the
//! pool depends on but does not enforce internally, and the pool never
//! holds excess receipt tokens itself.

use crate::errors::PoolResult;
use crate::types::Address;

/// External receipt-token service consumed by the deposit pool.
///
/// A `&mut` handle to an implementation carries the mint-and-burn
/// capability; implementations expose their own checked entry points for
/// callers outside that handle.
pub trait ReceiptToken {
    /// Mint `amount` receipts to `user`, growing total supply by `amount`
    fn mint(&mut self, user: Address, amount: u128) -> PoolResult<()>;

    /// Burn `amount` receipts from `from`; fails when the balance is short
    fn burn(&mut self, from: Address, amount: u128) -> PoolResult<()>;

    /// Whether `user` may call the privileged mint/burn entry points
    fn has_mint_and_burn_role(&self, user: Address) -> bool;

    /// Current receipt balance of `user`
    fn balance_of(&self, user: Address) -> u128;

    /// Burn `user`'s entire receipt balance; returns the amount burned
    fn return_all_user_tokens(&mut self, user: Address) -> PoolResult<u128>;

    /// Burn exactly `amount` of `user`'s receipts
    fn return_user_tokens(&mut self, user: Address, amount: u128) -> PoolResult<()>;

    /// Total receipts in circulation
    fn total_supply(&self) -> u128;
}
