//! Anchor IDL document model.
//!
//! Only the parts of the IDL needed to build instructions are modelled. Both
//! the legacy layout (`isMut`/`isSigner`, program id under `metadata.address`)
//! and the current layout (`writable`/`signer`, top-level `address`,
//! explicit `discriminator`) deserialize into the same types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum IdlError {
    #[error("Invalid IDL document: {0}")]
    InvalidDocument(String),
    #[error("Duplicate instruction name in IDL: {0}")]
    DuplicateInstruction(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdlDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IdlMetadata>,
    pub instructions: Vec<IdlInstruction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IdlMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<String>,
    /// Program id in legacy IDLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdlInstruction {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Vec<u8>>,
    pub accounts: Vec<IdlAccount>,
    #[serde(default)]
    pub args: Vec<IdlField>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdlAccount {
    pub name: String,
    #[serde(default, alias = "isMut")]
    pub writable: bool,
    #[serde(default, alias = "isSigner")]
    pub signer: bool,
    #[serde(default, alias = "isOptional")]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pda: Option<IdlPda>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdlPda {
    pub seeds: Vec<IdlSeed>,
    /// Program the address is derived against, when it is not the
    /// instruction's own program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<IdlSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IdlSeed {
    Const { value: IdlConstValue },
    Account { path: String },
    Arg { path: String },
}

/// Constant seed value: a byte array in current IDLs, a string in legacy ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum IdlConstValue {
    Bytes(Vec<u8>),
    Text(String),
}

impl IdlConstValue {
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            IdlConstValue::Bytes(bytes) => bytes.clone(),
            IdlConstValue::Text(text) => text.as_bytes().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: serde_json::Value,
}

impl IdlDocument {
    /// Parses and validates an IDL document from JSON.
    pub fn from_value(value: serde_json::Value) -> Result<Self, IdlError> {
        let idl: IdlDocument = serde_json::from_value(value)
            .map_err(|e| IdlError::InvalidDocument(e.to_string()))?;
        idl.validate()?;
        Ok(idl)
    }

    /// Instruction names must be unique within a document.
    pub fn validate(&self) -> Result<(), IdlError> {
        let mut seen = HashSet::new();
        for instruction in &self.instructions {
            if !seen.insert(instruction.name.as_str()) {
                return Err(IdlError::DuplicateInstruction(instruction.name.clone()));
            }
        }
        Ok(())
    }

    /// Program id declared by the document, in either layout.
    pub fn program_address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .or_else(|| self.metadata.as_ref().and_then(|m| m.address.as_deref()))
    }

    pub fn instruction(&self, name: &str) -> Option<&IdlInstruction> {
        self.instructions.iter().find(|ix| ix.name == name)
    }

    pub fn instruction_names(&self) -> Vec<&str> {
        self.instructions.iter().map(|ix| ix.name.as_str()).collect()
    }
}
