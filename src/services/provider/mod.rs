//! Blockchain network providers.

mod solana;
pub use solana::*;
