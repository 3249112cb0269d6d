//! IDL-driven transaction building.
//!
//! A build runs in three steps: classify the instruction's accounts
//! ([`fetch_method_config`]), bind each one to an address
//! ([`resolve_accounts`]) and compile the unsigned transaction
//! ([`assemble_transaction`]). Only the blockhash comes from the network.

use std::{str::FromStr, sync::Arc};

use log::info;
use solana_sdk::{pubkey::Pubkey, transaction::VersionedTransaction};

use crate::{
    models::{IdlDocument, ResolutionPolicy, TransactionBuildError},
    services::SolanaProviderTrait,
};

mod accounts;
pub use accounts::*;

mod assembler;
pub use assembler::*;

mod method_config;
pub use method_config::*;

pub struct TransactionBuilder {
    provider: Arc<dyn SolanaProviderTrait>,
    policy: ResolutionPolicy,
}

impl TransactionBuilder {
    pub fn new(provider: Arc<dyn SolanaProviderTrait>, policy: ResolutionPolicy) -> Self {
        Self { provider, policy }
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    /// Builds an unsigned transaction invoking `method_name` of `program_id`
    /// on behalf of `caller`. Both keys are base58.
    pub async fn build(
        &self,
        idl: &IdlDocument,
        method_name: &str,
        caller: &str,
        program_id: &str,
    ) -> Result<VersionedTransaction, TransactionBuildError> {
        let caller = parse_pubkey("account", caller)?;
        let program_id = parse_pubkey("program id", program_id)?;

        if let Some(declared) = idl.program_address() {
            if parse_pubkey("IDL address", declared)? != program_id {
                return Err(TransactionBuildError::MalformedInput(format!(
                    "IDL address {declared} does not match program id {program_id}"
                )));
            }
        }

        let config = fetch_method_config(idl, method_name, self.policy)?;
        let instruction = idl.instruction(method_name).ok_or_else(|| {
            TransactionBuildError::NotFound(format!("Method '{method_name}' not found in IDL"))
        })?;
        if !instruction.args.is_empty() {
            return Err(TransactionBuildError::UnsupportedInstructionArgs(
                instruction.name.clone(),
            ));
        }
        let resolved = resolve_accounts(&config, &caller, &program_id, self.policy)?;

        let blockhash = self.provider.get_latest_blockhash().await?;

        let transaction = assemble_transaction(
            &resolved,
            &config,
            instruction,
            &program_id,
            &caller,
            blockhash,
        )?;
        info!(
            "Built '{}' transaction of {} for {}",
            method_name, program_id, caller
        );
        Ok(transaction)
    }
}

fn parse_pubkey(label: &str, value: &str) -> Result<Pubkey, TransactionBuildError> {
    Pubkey::from_str(value)
        .map_err(|e| TransactionBuildError::MalformedInput(format!("Invalid {label} '{value}': {e}")))
}
