//! # API Controllers Module
//!
//! Handles HTTP endpoints for the referral network API.
//!
//! ## Controllers
//!
//! * `actions` - Solana Actions endpoints served for each blink
//! * `projects` - Project registration
//! * `blinks` - Blink creation and lookup

pub mod actions;
pub mod blinks;
pub mod projects;
