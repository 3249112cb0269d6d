use serde::Serializer;
use solana_sdk::pubkey::Pubkey;

/// Serializes a public key as its base58 string.
pub fn serialize_pubkey<S>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&pubkey.to_string())
}
