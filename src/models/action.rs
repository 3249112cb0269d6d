//! Request and response bodies of the Solana Actions protocol, which Blink
//! clients use to fetch metadata and request transactions.

use serde::{Deserialize, Serialize};

/// Metadata returned by `GET` on an action endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionGetResponse {
    #[serde(rename = "type")]
    pub kind: ActionType,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ActionLinks>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Action,
    Transaction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkedAction {
    #[serde(rename = "type")]
    pub kind: ActionType,
    pub label: String,
    pub href: String,
}

/// Body of `POST` on an action endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionPostRequest {
    /// Base58 public key of the wallet requesting the transaction.
    pub account: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionPostResponse {
    #[serde(rename = "type")]
    pub kind: ActionType,
    /// Base64 encoded, unsigned, serialized transaction.
    pub transaction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionPostResponse {
    pub fn transaction(encoded: String) -> Self {
        Self {
            kind: ActionType::Transaction,
            transaction: encoded,
            message: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionError {
    pub message: String,
}
