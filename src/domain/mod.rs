//! # Domain Module
//!
//! Core domain logic of the referral network: turning an IDL instruction
//! into an unsigned Solana transaction.

pub mod transaction;
pub use transaction::*;
