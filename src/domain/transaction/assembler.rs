//! Assembles the unsigned versioned transaction a blink hands to the wallet.

use log::debug;
use sha2::{Digest, Sha256};
use solana_sdk::{
    hash::Hash,
    instruction::{AccountMeta, Instruction},
    message::{v0, VersionedMessage},
    pubkey::Pubkey,
    signature::Signature,
    transaction::VersionedTransaction,
};

use super::ResolvedAccounts;
use crate::{
    constants::{ANCHOR_DISCRIMINATOR_LENGTH, ANCHOR_INSTRUCTION_NAMESPACE},
    models::{IdlInstruction, MethodConfig, TransactionBuildError},
    utils::{base64_decode, base64_encode, camel_to_snake},
};

/// Instruction data prefix: the IDL's explicit discriminator, or Anchor's
/// `sha256("global:<snake_case name>")[..8]`.
pub fn instruction_discriminator(
    instruction: &IdlInstruction,
) -> Result<Vec<u8>, TransactionBuildError> {
    match &instruction.discriminator {
        Some(discriminator) if discriminator.is_empty() => {
            Err(TransactionBuildError::MalformedInput(format!(
                "Instruction '{}' declares an empty discriminator",
                instruction.name
            )))
        }
        Some(discriminator) => Ok(discriminator.clone()),
        None => {
            let preimage = format!(
                "{}:{}",
                ANCHOR_INSTRUCTION_NAMESPACE,
                camel_to_snake(&instruction.name)
            );
            let hash = Sha256::digest(preimage.as_bytes());
            Ok(hash[..ANCHOR_DISCRIMINATOR_LENGTH].to_vec())
        }
    }
}

/// Builds a single-instruction v0 transaction paid for by `caller`.
///
/// Signatures are left as default placeholders; the wallet signs.
pub fn assemble_transaction(
    resolved: &ResolvedAccounts,
    config: &MethodConfig,
    instruction: &IdlInstruction,
    program_id: &Pubkey,
    caller: &Pubkey,
    blockhash: Hash,
) -> Result<VersionedTransaction, TransactionBuildError> {
    if !instruction.args.is_empty() {
        return Err(TransactionBuildError::UnsupportedInstructionArgs(
            instruction.name.clone(),
        ));
    }

    let accounts = config
        .accounts
        .iter()
        .map(|account| match resolved.get(&account.name) {
            Some(pubkey) => Ok(AccountMeta {
                pubkey: *pubkey,
                is_signer: account.signer,
                is_writable: account.writable,
            }),
            // Anchor reads the program id as "not supplied"
            None if account.optional => Ok(AccountMeta::new_readonly(*program_id, false)),
            None => Err(TransactionBuildError::MissingAccount(account.name.clone())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let instruction = Instruction {
        program_id: *program_id,
        accounts,
        data: instruction_discriminator(instruction)?,
    };

    let message = v0::Message::try_compile(caller, &[instruction], &[], blockhash)
        .map_err(|e| TransactionBuildError::Build(e.to_string()))?;
    let signatures =
        vec![Signature::default(); usize::from(message.header.num_required_signatures)];

    debug!(
        "Assembled '{}' for {} with {} account keys",
        config.method_name,
        caller,
        message.account_keys.len()
    );

    Ok(VersionedTransaction {
        signatures,
        message: VersionedMessage::V0(message),
    })
}

/// Serializes a transaction the way wallets expect it: bincode, then base64.
pub fn encode_transaction(
    transaction: &VersionedTransaction,
) -> Result<String, TransactionBuildError> {
    let bytes = bincode::serialize(transaction)
        .map_err(|e| TransactionBuildError::Build(format!("Failed to serialize: {e}")))?;
    Ok(base64_encode(&bytes))
}

pub fn decode_transaction(encoded: &str) -> Result<VersionedTransaction, TransactionBuildError> {
    let bytes = base64_decode(encoded)
        .map_err(|e| TransactionBuildError::MalformedInput(format!("Invalid base64: {e}")))?;
    bincode::deserialize(&bytes)
        .map_err(|e| TransactionBuildError::MalformedInput(format!("Invalid transaction: {e}")))
}
