//! # Referral Network
//!
//! Registers on-chain programs by their Anchor IDL and serves shareable
//! referral links (blinks) through the Solana Actions protocol. Redeeming a
//! blink builds an unsigned transaction straight from the registered IDL.

pub mod api;
pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
