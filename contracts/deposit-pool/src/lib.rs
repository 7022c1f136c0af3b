//! Deposit Pool Contract
//!
//! Accounting core of the prizepool protocol. Users deposit the base
//! asset, receive receipt tokens 1:1 through the external token service,
//! and the pool accrues time-weighted interest on aggregate deposits into
//! a shared balance held for later distribution.
//!
//! ## Key Guarantees
//!
//! - **Atomicity**: each entry point commits every mutation and external
//!   call, or none. Failures after mutation restore the pre-call snapshot
//!   and compensate already-issued burns.
//! - **Ordering**: a full exit deregisters and burns before principal is
//!   decremented; every internal mutation is finalized before the outbound
//!   fund transfer, so a reentrant observer sees updated state.
//! - **Accrual discipline**: interest is folded in before new principal is
//!   credited, so deposits never earn for time before they arrived.
//! - **Peg**: receipt balances track principal 1:1 through the token
//!   service; the pool never holds receipts itself.

use std::collections::HashMap;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use prizepool_common::{
    access::AutomationCapability,
    errors::{PoolError, PoolResult},
    events::{EventLog, PoolEvent},
    funds::FundTransfer,
    math::{accrued_interest, safe_add, safe_sub},
    registry::ParticipantRegistry,
    token::ReceiptToken,
    types::{Address, PoolConfig, PoolState, UserAccount},
};

// ============ Pool Statistics ============

/// Aggregate pool statistics for reporting.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct PoolStats {
    /// Sum of all deposited principal
    pub total_deposits: u128,
    /// Accrued, undistributed interest
    pub pool_balance: u128,
    /// Number of active participants
    pub participant_count: u64,
    /// Timestamp of the last accrual
    pub last_accrued: u64,
    /// Per-second interest rate, 1e18-scaled
    pub interest_rate_per_second: u128,
}

// ============ Operation Snapshot ============

/// State touched by a single operation, captured before mutation and
/// restored wholesale when a later step fails.
#[derive(Debug, Clone)]
struct OpSnapshot {
    state: PoolState,
    account: Option<UserAccount>,
    was_participant: bool,
}

// ============ Deposit Pool ============

/// The accounting controller: owns the pool state, the per-user account
/// table, and the participant registry. External collaborators (the
/// receipt-token service and the payout rail) are injected per call.
#[derive(Debug, Clone)]
pub struct DepositPool {
    state: PoolState,
    accounts: HashMap<Address, UserAccount>,
    registry: ParticipantRegistry,
    automation: AutomationCapability,
    events: EventLog,
}

impl DepositPool {
    /// Create a pool at the given timestamp
    pub fn new(config: PoolConfig, now: u64) -> Self {
        Self {
            state: PoolState::new(config.interest_rate_per_second, now),
            accounts: HashMap::new(),
            registry: ParticipantRegistry::new(),
            automation: AutomationCapability::new(config.automation_operator),
            events: EventLog::new(),
        }
    }

    // ============ Public Operations ============

    /// Deposit `amount` of the base asset for `user`.
    ///
    /// On success `total_deposits` grows by exactly `amount`, the user is
    /// registered as a participant, and their receipt balance grows by
    /// exactly `amount`.
    pub fn deposit(
        &mut self,
        user: Address,
        amount: u128,
        now: u64,
        token: &mut dyn ReceiptToken,
    ) -> PoolResult<()> {
        // 1. Amount must be positive
        if amount == 0 {
            return Err(PoolError::ZeroValue);
        }

        let snapshot = self.snapshot_for(&user);
        if let Err(err) = self.apply_deposit(user, amount, now, token) {
            self.restore(user, snapshot);
            return Err(err);
        }

        // 5. Emit event once the operation is committed
        self.events.emit(PoolEvent::Deposit {
            user,
            amount,
            new_total_deposits: self.state.total_deposits,
            timestamp: now,
        });

        Ok(())
    }

    fn apply_deposit(
        &mut self,
        user: Address,
        amount: u128,
        now: u64,
        token: &mut dyn ReceiptToken,
    ) -> PoolResult<()> {
        // 2. Fold in interest on the pre-deposit principal, so the new
        //    deposit earns nothing for time before it arrived
        self.accrue(now)?;

        // 3. Register the participant (idempotent) and credit principal
        self.registry.add(user);
        let account = self.accounts.entry(user).or_default();
        account.is_participant = true;
        account.amount_deposited = safe_add(account.amount_deposited, amount)?;
        self.state.total_deposits = safe_add(self.state.total_deposits, amount)?;

        // 4. Mint receipts 1:1 with the new principal
        token.mint(user, amount)?;

        Ok(())
    }

    /// Withdraw `amount` of previously deposited principal for `user`.
    ///
    /// A withdrawal of the entire principal deregisters the user and burns
    /// their whole receipt balance. If the outbound refund fails, every
    /// effect of the call (registry, balances, burned receipts) is undone
    /// and `TransferFailed` is surfaced.
    pub fn withdraw(
        &mut self,
        user: Address,
        amount: u128,
        token: &mut dyn ReceiptToken,
        funds: &mut dyn FundTransfer,
    ) -> PoolResult<()> {
        // 1. Amount must be positive
        if amount == 0 {
            return Err(PoolError::ZeroValue);
        }

        // 2. Caller must be a participant with sufficient principal;
        //    checked before any mutation
        let principal = match self.accounts.get(&user) {
            Some(account) if account.is_participant => account.amount_deposited,
            _ => return Err(PoolError::NotParticipant { user }),
        };
        if amount > principal {
            return Err(PoolError::ExceedsBalance {
                available: principal,
                requested: amount,
            });
        }

        let snapshot = self.snapshot_for(&user);
        if let Err(err) = self.apply_withdraw(user, amount, principal, token, funds) {
            self.restore(user, snapshot);
            return Err(err);
        }

        Ok(())
    }

    fn apply_withdraw(
        &mut self,
        user: Address,
        amount: u128,
        principal: u128,
        token: &mut dyn ReceiptToken,
        funds: &mut dyn FundTransfer,
    ) -> PoolResult<()> {
        let full_withdrawal = amount == principal;

        // 3. Burn receipts. A full exit deregisters first and burns the
        //    entire receipt balance, before principal is decremented.
        let burned = if full_withdrawal {
            self.registry.remove(user)?;
            if let Some(account) = self.accounts.get_mut(&user) {
                account.is_participant = false;
            }
            token.return_all_user_tokens(user)?
        } else {
            token.return_user_tokens(user, amount)?;
            amount
        };

        // 4. Debit principal; an emptied account is removed entirely
        if full_withdrawal {
            self.accounts.remove(&user);
        } else {
            let account = self
                .accounts
                .get_mut(&user)
                .ok_or(PoolError::NotParticipant { user })?;
            account.amount_deposited = safe_sub(account.amount_deposited, amount)?;
        }
        self.state.total_deposits = safe_sub(self.state.total_deposits, amount)?;

        // 5. Internal state is final; issue the refund last so a reentrant
        //    call observes updated balances
        if funds.transfer(user, amount).is_err() {
            // Undo the burn; the wrapper restores the accounting snapshot
            token.mint(user, burned)?;
            return Err(PoolError::TransferFailed { to: user, amount });
        }

        Ok(())
    }

    /// Fold time-weighted interest into the pool balance.
    ///
    /// Idempotent within a single instant: a second call at the same `now`
    /// changes nothing. `last_accrued` never decreases.
    pub fn accrue(&mut self, now: u64) -> PoolResult<()> {
        let elapsed = now.saturating_sub(self.state.last_accrued);
        if elapsed == 0 {
            return Ok(());
        }

        let interest = accrued_interest(
            self.state.total_deposits,
            self.state.interest_rate_per_second,
            elapsed,
        )?;
        self.state.pool_balance = safe_add(self.state.pool_balance, interest)?;
        self.state.last_accrued = now;

        Ok(())
    }

    /// Entry point reserved for the automation operator that disburses the
    /// accrued pool balance to a selected participant. Only the capability
    /// check is implemented here; selection and payout are supplied by the
    /// automation layer embedding the pool.
    pub fn distribute_pool_balance(&mut self, caller: Address) -> PoolResult<()> {
        self.automation.ensure(caller)?;
        Ok(())
    }

    // ============ Queries ============

    /// Whether `user` currently holds a nonzero deposit
    pub fn is_participant(&self, user: &Address) -> bool {
        self.registry.contains(user)
    }

    /// Accrued interest held for distribution (not total funds held)
    pub fn pool_balance(&self) -> u128 {
        self.state.pool_balance
    }

    /// Sum of all deposited principal
    pub fn total_deposits(&self) -> u128 {
        self.state.total_deposits
    }

    /// Principal on record for `user`; zero for non-participants
    pub fn principal_of(&self, user: &Address) -> u128 {
        self.accounts
            .get(user)
            .map(|a| a.amount_deposited)
            .unwrap_or(0)
    }

    /// Number of active participants
    pub fn participant_count(&self) -> usize {
        self.registry.len()
    }

    /// The dense participant sequence, for the selection layer
    pub fn participants(&self) -> &[Address] {
        self.registry.as_slice()
    }

    /// Timestamp of the last accrual
    pub fn last_accrued(&self) -> u64 {
        self.state.last_accrued
    }

    /// Per-second interest rate, 1e18-scaled
    pub fn interest_rate_per_second(&self) -> u128 {
        self.state.interest_rate_per_second
    }

    /// Events emitted so far
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Drain the event log, handing the events to an indexer
    pub fn take_events(&mut self) -> EventLog {
        std::mem::take(&mut self.events)
    }

    /// Aggregate statistics snapshot
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            total_deposits: self.state.total_deposits,
            pool_balance: self.state.pool_balance,
            participant_count: self.registry.len() as u64,
            last_accrued: self.state.last_accrued,
            interest_rate_per_second: self.state.interest_rate_per_second,
        }
    }

    // ============ Snapshot / Restore ============

    fn snapshot_for(&self, user: &Address) -> OpSnapshot {
        OpSnapshot {
            state: self.state.clone(),
            account: self.accounts.get(user).cloned(),
            was_participant: self.registry.contains(user),
        }
    }

    fn restore(&mut self, user: Address, snapshot: OpSnapshot) {
        self.state = snapshot.state;
        match snapshot.account {
            Some(account) => {
                self.accounts.insert(user, account);
            }
            None => {
                self.accounts.remove(&user);
            }
        }

        let in_registry = self.registry.contains(&user);
        if snapshot.was_participant && !in_registry {
            self.registry.add(user);
        } else if !snapshot.was_participant && in_registry {
            // Membership was introduced by the failed operation
            self.registry.remove(user).ok();
        }
    }
}

// ============ Tests ============
