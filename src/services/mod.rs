//! # Services Module
//!
//! External service integrations: the Solana RPC provider.

mod provider;
pub use provider::*;
