//! Prizepool Common Library
//!
//! Shared types, constants, and utilities for all prizepool contracts.
//! This crate is the foundation for the whole protocol.
//!
//! ## Modules
//!
//! - **Constants**: token metadata, fixed-point precision, interest rate
//! - **Errors**: typed error enum with stable error codes
//! - **Types**: pool state, user accounts, configuration
//! - **Math**: checked arithmetic and the interest accrual formula
//! - **Registry**: O(1) swap-remove participant set
//! - **Access**: automation capability gating distribution
//! - **Events**: protocol events and the event log collector
//! - **Token / Funds**: interfaces to the external receipt-token service
//!   and the base-asset payout rail

pub mod access;
pub mod constants;
pub mod errors;
pub mod events;
pub mod funds;
pub mod math;
pub mod registry;
pub mod token;
pub mod types;

// Re-exports for convenience
pub use access::*;
pub use errors::*;
pub use events::*;
pub use funds::*;
pub use math::*;
pub use registry::*;
pub use token::*;
pub use types::*;
