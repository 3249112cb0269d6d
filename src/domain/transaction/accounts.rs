//! Binds every account of a [`MethodConfig`] to a concrete address.

use std::collections::HashMap;

use log::{debug, warn};
use solana_sdk::pubkey::{Pubkey, MAX_SEEDS, MAX_SEED_LEN};
use solana_system_interface::program as system_program;

use crate::models::{
    AccountConfig, AccountKind, MethodConfig, ResolutionPolicy, SeedConfig, TransactionBuildError,
};

/// Addresses keyed by camelCase account name, plus the bump of each
/// derived address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedAccounts {
    addresses: HashMap<String, Pubkey>,
    bumps: HashMap<String, u8>,
}

impl ResolvedAccounts {
    pub fn get(&self, name: &str) -> Option<&Pubkey> {
        self.addresses.get(name)
    }

    pub fn bump(&self, name: &str) -> Option<u8> {
        self.bumps.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn insert(&mut self, name: impl Into<String>, address: Pubkey) {
        self.addresses.insert(name.into(), address);
    }
}

pub fn resolve_accounts(
    config: &MethodConfig,
    caller: &Pubkey,
    program_id: &Pubkey,
    policy: ResolutionPolicy,
) -> Result<ResolvedAccounts, TransactionBuildError> {
    let mut resolved = ResolvedAccounts::default();

    for account in &config.accounts {
        let address = match &account.kind {
            AccountKind::Signer => *caller,
            AccountKind::SystemProgram => system_program::id(),
            AccountKind::Fixed { address } => *address,
            AccountKind::Omitted => continue,
            AccountKind::Pda { seeds, program } => {
                let seeds = resolve_seeds(account, seeds, caller, policy)?;
                let program =
                    resolve_program(account, program.as_ref(), caller, program_id, policy)?;
                let (address, bump) = derive_address(account, &seeds, &program)?;
                resolved.bumps.insert(account.name.clone(), bump);
                address
            }
        };
        resolved.addresses.insert(account.name.clone(), address);
    }

    debug!(
        "Resolved {} accounts for '{}'",
        resolved.len(),
        config.method_name
    );
    Ok(resolved)
}

fn resolve_seeds(
    account: &AccountConfig,
    seeds: &[SeedConfig],
    caller: &Pubkey,
    policy: ResolutionPolicy,
) -> Result<Vec<Vec<u8>>, TransactionBuildError> {
    let mut bytes = Vec::with_capacity(seeds.len());
    for seed in seeds {
        match seed {
            SeedConfig::Const { value } => bytes.push(value.clone()),
            SeedConfig::SignerPublicKey => bytes.push(caller.to_bytes().to_vec()),
            SeedConfig::Unsupported { kind, path } => match policy {
                ResolutionPolicy::Strict => {
                    return Err(TransactionBuildError::UnsupportedSeed {
                        account: account.name.clone(),
                        kind: kind.clone(),
                        path: path.clone(),
                    })
                }
                ResolutionPolicy::Lenient => warn!(
                    "Dropping unsupported {} seed '{}' of account '{}'",
                    kind, path, account.name
                ),
            },
        }
    }
    Ok(bytes)
}

/// PDAs derive against the target program unless the IDL names another one.
fn resolve_program(
    account: &AccountConfig,
    program: Option<&SeedConfig>,
    caller: &Pubkey,
    program_id: &Pubkey,
    policy: ResolutionPolicy,
) -> Result<Pubkey, TransactionBuildError> {
    match program {
        None => Ok(*program_id),
        Some(SeedConfig::Const { value }) => Pubkey::try_from(value.as_slice()).map_err(|_| {
            TransactionBuildError::MalformedInput(format!(
                "PDA program of account '{}' is not a 32 byte public key",
                account.name
            ))
        }),
        Some(SeedConfig::SignerPublicKey) => Ok(*caller),
        Some(SeedConfig::Unsupported { kind, path }) => match policy {
            ResolutionPolicy::Strict => Err(TransactionBuildError::UnsupportedSeed {
                account: account.name.clone(),
                kind: kind.clone(),
                path: path.clone(),
            }),
            ResolutionPolicy::Lenient => {
                warn!(
                    "Unsupported PDA program of account '{}', deriving against {}",
                    account.name, program_id
                );
                Ok(*program_id)
            }
        },
    }
}

fn derive_address(
    account: &AccountConfig,
    seeds: &[Vec<u8>],
    program: &Pubkey,
) -> Result<(Pubkey, u8), TransactionBuildError> {
    // one slot is reserved for the bump
    if seeds.len() >= MAX_SEEDS {
        return Err(TransactionBuildError::MalformedInput(format!(
            "Account '{}' declares {} seeds, at most {} are allowed",
            account.name,
            seeds.len(),
            MAX_SEEDS - 1
        )));
    }
    if let Some(seed) = seeds.iter().find(|seed| seed.len() > MAX_SEED_LEN) {
        return Err(TransactionBuildError::MalformedInput(format!(
            "Seed of account '{}' is {} bytes, at most {} are allowed",
            account.name,
            seed.len(),
            MAX_SEED_LEN
        )));
    }

    let seed_refs: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();
    Pubkey::try_find_program_address(&seed_refs, program).ok_or_else(|| {
        TransactionBuildError::Build(format!(
            "Unable to derive an address for account '{}'",
            account.name
        ))
    })
}
