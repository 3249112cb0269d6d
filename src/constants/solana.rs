//! Solana and Anchor constants used when building transactions from an IDL.

/// Account name Anchor gives the system program in generated IDLs.
pub const SYSTEM_PROGRAM_ACCOUNT_NAME: &str = "system_program";

/// Base58 address of the system program.
pub const SYSTEM_PROGRAM_ADDRESS: &str = "11111111111111111111111111111111";

/// Sighash namespace Anchor uses for instruction discriminators.
pub const ANCHOR_INSTRUCTION_NAMESPACE: &str = "global";

/// Length of an Anchor instruction discriminator.
pub const ANCHOR_DISCRIMINATOR_LENGTH: usize = 8;

/// Default RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Default RPC request timeout, in seconds.
pub const DEFAULT_RPC_TIMEOUT_SECONDS: u64 = 30;
