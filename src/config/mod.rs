//! Service configuration.
//!
//! Runtime settings come from the environment (see [`ServerConfig`]); the
//! registry of projects and blinks served at startup comes from a JSON file
//! (see [`load_config`]).

mod server_config;
pub use server_config::*;

mod config_file;
pub use config_file::*;
