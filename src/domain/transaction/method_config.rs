//! Classifies the accounts of an IDL instruction into a [`MethodConfig`].

use std::str::FromStr;

use log::{debug, warn};
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::{SYSTEM_PROGRAM_ACCOUNT_NAME, SYSTEM_PROGRAM_ADDRESS},
    models::{
        AccountConfig, AccountKind, IdlAccount, IdlDocument, IdlInstruction, IdlSeed,
        MethodConfig, ResolutionPolicy, SeedConfig, TransactionBuildError,
    },
    utils::{camel_to_snake, snake_to_camel},
};

/// Builds the runtime configuration of `method_name` from `idl`.
///
/// Accounts keep the order the instruction declares them in. Classification
/// checks, in order: signer flag, PDA recipe, system program, fixed address.
/// Optional accounts left over are omitted. Anything else is an error under
/// [`ResolutionPolicy::Strict`] and is bound to the caller under
/// [`ResolutionPolicy::Lenient`].
pub fn fetch_method_config(
    idl: &IdlDocument,
    method_name: &str,
    policy: ResolutionPolicy,
) -> Result<MethodConfig, TransactionBuildError> {
    let instruction = idl.instruction(method_name).ok_or_else(|| {
        TransactionBuildError::NotFound(format!("Method '{method_name}' not found in IDL"))
    })?;

    let accounts = instruction
        .accounts
        .iter()
        .map(|account| {
            Ok(AccountConfig {
                name: snake_to_camel(&account.name),
                idl_name: account.name.clone(),
                kind: classify_account(account, instruction, policy)?,
                writable: account.writable,
                signer: account.signer,
                optional: account.optional,
            })
        })
        .collect::<Result<Vec<_>, TransactionBuildError>>()?;

    debug!(
        "Resolved method config for '{}' with {} accounts",
        method_name,
        accounts.len()
    );

    Ok(MethodConfig {
        method_name: method_name.to_string(),
        accounts,
    })
}

fn classify_account(
    account: &IdlAccount,
    instruction: &IdlInstruction,
    policy: ResolutionPolicy,
) -> Result<AccountKind, TransactionBuildError> {
    if account.signer {
        return Ok(AccountKind::Signer);
    }

    if let Some(pda) = &account.pda {
        return Ok(AccountKind::Pda {
            seeds: pda
                .seeds
                .iter()
                .map(|seed| seed_config(seed, instruction, policy))
                .collect(),
            program: pda.program.as_ref().map(program_config),
        });
    }

    let is_system_program = camel_to_snake(&account.name) == SYSTEM_PROGRAM_ACCOUNT_NAME
        || account.address.as_deref() == Some(SYSTEM_PROGRAM_ADDRESS);
    if is_system_program {
        return Ok(AccountKind::SystemProgram);
    }

    if let Some(address) = &account.address {
        let address = Pubkey::from_str(address).map_err(|e| {
            TransactionBuildError::MalformedInput(format!(
                "Invalid address for account '{}': {}",
                account.name, e
            ))
        })?;
        return Ok(AccountKind::Fixed { address });
    }

    if account.optional {
        debug!(
            "Optional account '{}' of '{}' is not supplied",
            account.name, instruction.name
        );
        return Ok(AccountKind::Omitted);
    }

    match policy {
        ResolutionPolicy::Strict => Err(TransactionBuildError::UnsupportedAccountKind(
            account.name.clone(),
        )),
        ResolutionPolicy::Lenient => {
            warn!(
                "Account '{}' of '{}' has no supported kind, binding it to the caller",
                account.name, instruction.name
            );
            Ok(AccountKind::Signer)
        }
    }
}

/// The caller's key is the only runtime value available, so account seeds
/// resolve to it. Strict mode only accepts paths naming a signer of the
/// same instruction.
fn seed_config(seed: &IdlSeed, instruction: &IdlInstruction, policy: ResolutionPolicy) -> SeedConfig {
    match seed {
        IdlSeed::Const { value } => SeedConfig::Const {
            value: value.to_bytes(),
        },
        IdlSeed::Account { path } => {
            if policy == ResolutionPolicy::Lenient || names_signer(instruction, path) {
                SeedConfig::SignerPublicKey
            } else {
                SeedConfig::Unsupported {
                    kind: "account".to_string(),
                    path: path.clone(),
                }
            }
        }
        IdlSeed::Arg { path } => SeedConfig::Unsupported {
            kind: "arg".to_string(),
            path: path.clone(),
        },
    }
}

/// Only a constant key can name the deriving program.
fn program_config(seed: &IdlSeed) -> SeedConfig {
    match seed {
        IdlSeed::Const { value } => SeedConfig::Const {
            value: value.to_bytes(),
        },
        IdlSeed::Account { path } => SeedConfig::Unsupported {
            kind: "account".to_string(),
            path: path.clone(),
        },
        IdlSeed::Arg { path } => SeedConfig::Unsupported {
            kind: "arg".to_string(),
            path: path.clone(),
        },
    }
}

fn names_signer(instruction: &IdlInstruction, path: &str) -> bool {
    let target = camel_to_snake(path);
    instruction
        .accounts
        .iter()
        .any(|account| account.signer && camel_to_snake(&account.name) == target)
}
