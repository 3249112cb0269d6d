//! Runtime description of one IDL instruction, with each account tagged by
//! the strategy used to bind it to an address.

use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

/// How permissive account classification and seed resolution are.
///
/// `Strict` fails the build when an account cannot be classified or a seed
/// cannot be resolved. `Lenient` binds unclassified accounts to the caller
/// and drops unresolvable seeds before deriving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionPolicy {
    #[default]
    Strict,
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodConfig {
    pub method_name: String,
    pub accounts: Vec<AccountConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountConfig {
    /// camelCase key the target program expects.
    pub name: String,
    /// Name as declared in the IDL.
    pub idl_name: String,
    pub kind: AccountKind,
    pub writable: bool,
    pub signer: bool,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AccountKind {
    Signer,
    Pda {
        seeds: Vec<SeedConfig>,
        program: Option<SeedConfig>,
    },
    SystemProgram,
    Fixed {
        #[serde(serialize_with = "crate::utils::serialize_pubkey")]
        address: Pubkey,
    },
    /// Optional account with no way to bind it; passed as not supplied.
    Omitted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SeedConfig {
    Const { value: Vec<u8> },
    SignerPublicKey,
    Unsupported { kind: String, path: String },
}

impl MethodConfig {
    pub fn account(&self, name: &str) -> Option<&AccountConfig> {
        self.accounts.iter().find(|account| account.name == name)
    }
}
