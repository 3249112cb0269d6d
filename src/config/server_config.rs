use std::env;

use crate::constants::{
    DEFAULT_ACTION_ICON_PATH, DEFAULT_CONFIG_FILE_PATH, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_RPC_TIMEOUT_SECONDS, DEFAULT_RPC_URL,
};
use crate::models::ResolutionPolicy;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rpc_url: String,
    pub rpc_timeout_seconds: u64,
    pub config_file_path: String,
    pub resolution_policy: ResolutionPolicy,
    pub action_icon_path: String,
}

impl ServerConfig {
    /// Reads the server configuration from environment variables, falling
    /// back to defaults for anything unset or unparsable.
    ///
    /// - `HOST`, `PORT`: bind address
    /// - `RPC_URL`, `RPC_TIMEOUT_SECONDS`: Solana RPC endpoint
    /// - `CONFIG_FILE_PATH`: project/blink registry file
    /// - `STRICT_ACCOUNT_RESOLUTION`: `false` restores the permissive account
    ///   classification (unknown accounts bound to the caller, unsupported
    ///   seeds dropped)
    /// - `ACTION_ICON_PATH`: icon path advertised in action metadata
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            rpc_url: env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string()),
            rpc_timeout_seconds: env::var("RPC_TIMEOUT_SECONDS")
                .ok()
                .and_then(|timeout| timeout.parse().ok())
                .unwrap_or(DEFAULT_RPC_TIMEOUT_SECONDS),
            config_file_path: env::var("CONFIG_FILE_PATH")
                .unwrap_or_else(|_| DEFAULT_CONFIG_FILE_PATH.to_string()),
            resolution_policy: match env::var("STRICT_ACCOUNT_RESOLUTION") {
                Ok(value) if value.eq_ignore_ascii_case("false") => ResolutionPolicy::Lenient,
                _ => ResolutionPolicy::Strict,
            },
            action_icon_path: env::var("ACTION_ICON_PATH")
                .unwrap_or_else(|_| DEFAULT_ACTION_ICON_PATH.to_string()),
        }
    }
}
