//! Receipt Token Ledger
//!
//! Reference implementation of the receipt-token service: a fungible
//! ledger that tracks one receipt per base unit of pooled principal.
//! Only the authorized minter (the deposit pool) can mint and burn.
//!
//! ## Key Rules
//!
//! - **Mint Authorization**: privileged entry points check the caller
//! - **Supply Tracking**: total, cumulative minted/burned, holder count
//! - **Zero Rejection**: zero-amount mints and burns are errors
//! - **No Dust Entries**: a balance that reaches zero is removed

use std::collections::HashMap;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use prizepool_common::{
    constants::token,
    errors::{PoolError, PoolResult},
    token::ReceiptToken,
    types::Address,
};

// ============ Ledger State ============

/// In-memory receipt-token ledger.
///
/// A `&mut ReceiptLedger` handle acts with the authorized-minter
/// capability; external callers go through the `*_from` entry points,
/// which check the caller against the configured minter.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct ReceiptLedger {
    /// Address authorized to mint and burn (the deposit pool)
    authorized_minter: Address,
    /// Receipt balance per holder; entries exist only while nonzero
    balances: HashMap<Address, u128>,
    /// Receipts currently in circulation
    total_supply: u128,
    /// Cumulative receipts ever minted
    total_minted: u128,
    /// Cumulative receipts ever burned
    total_burned: u128,
    /// Number of addresses with a nonzero balance
    holder_count: u64,
}

impl ReceiptLedger {
    /// Create a ledger bound to an authorized minter
    pub fn new(authorized_minter: Address) -> Self {
        Self {
            authorized_minter,
            balances: HashMap::new(),
            total_supply: 0,
            total_minted: 0,
            total_burned: 0,
            holder_count: 0,
        }
    }

    /// Token name
    pub fn name() -> &'static str {
        token::NAME
    }

    /// Token symbol
    pub fn symbol() -> &'static str {
        token::SYMBOL
    }

    /// Token decimals
    pub fn decimals() -> u8 {
        token::DECIMALS
    }

    /// Cumulative receipts minted
    pub fn total_minted(&self) -> u128 {
        self.total_minted
    }

    /// Cumulative receipts burned
    pub fn total_burned(&self) -> u128 {
        self.total_burned
    }

    /// Circulating supply derived from the cumulative counters
    pub fn circulating(&self) -> u128 {
        self.total_minted.saturating_sub(self.total_burned)
    }

    /// Number of addresses holding a nonzero balance
    pub fn holder_count(&self) -> u64 {
        self.holder_count
    }

    // ============ Privileged Entry Points ============

    /// Mint with an explicit caller; rejects callers without the role
    pub fn mint_from(&mut self, caller: Address, to: Address, amount: u128) -> PoolResult<()> {
        if caller != self.authorized_minter {
            return Err(PoolError::MintUnauthorized { caller });
        }
        self.credit(to, amount)
    }

    /// Burn with an explicit caller; rejects callers without the role
    pub fn burn_from(&mut self, caller: Address, from: Address, amount: u128) -> PoolResult<()> {
        if caller != self.authorized_minter {
            return Err(PoolError::BurnUnauthorized { caller });
        }
        self.debit(from, amount)
    }

    // ============ Balance Mutation ============

    fn credit(&mut self, to: Address, amount: u128) -> PoolResult<()> {
        if amount == 0 {
            return Err(PoolError::ZeroAmount);
        }

        // All checks happen before any field is touched
        let current = self.balances.get(&to).copied().unwrap_or(0);
        let new_balance = current.checked_add(amount).ok_or(PoolError::Overflow)?;
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(PoolError::Overflow)?;

        if current == 0 {
            self.holder_count += 1;
        }
        self.balances.insert(to, new_balance);
        self.total_supply = new_supply;
        self.total_minted = self.total_minted.saturating_add(amount);

        Ok(())
    }

    fn debit(&mut self, from: Address, amount: u128) -> PoolResult<()> {
        if amount == 0 {
            return Err(PoolError::ZeroAmount);
        }

        let available = self.balances.get(&from).copied().unwrap_or(0);
        if available < amount {
            return Err(PoolError::InsufficientBalance {
                available,
                requested: amount,
            });
        }

        let remaining = available - amount;
        if remaining == 0 {
            self.balances.remove(&from);
            self.holder_count = self.holder_count.saturating_sub(1);
        } else {
            self.balances.insert(from, remaining);
        }

        self.total_supply = self.total_supply.saturating_sub(amount);
        self.total_burned = self.total_burned.saturating_add(amount);

        Ok(())
    }
}

impl ReceiptToken for ReceiptLedger {
    fn mint(&mut self, user: Address, amount: u128) -> PoolResult<()> {
        let minter = self.authorized_minter;
        self.mint_from(minter, user, amount)
    }

    fn burn(&mut self, from: Address, amount: u128) -> PoolResult<()> {
        let minter = self.authorized_minter;
        self.burn_from(minter, from, amount)
    }

    fn has_mint_and_burn_role(&self, user: Address) -> bool {
        user == self.authorized_minter
    }

    fn balance_of(&self, user: Address) -> u128 {
        self.balances.get(&user).copied().unwrap_or(0)
    }

    fn return_all_user_tokens(&mut self, user: Address) -> PoolResult<u128> {
        let burned = self.balance_of(user);
        if burned > 0 {
            self.debit(user, burned)?;
        }
        Ok(burned)
    }

    fn return_user_tokens(&mut self, user: Address, amount: u128) -> PoolResult<()> {
        self.debit(user, amount)
    }

    fn total_supply(&self) -> u128 {
        self.total_supply
    }
}

// ============ Tests ============
