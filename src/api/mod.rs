//! # API Module
//!
//! HTTP API of the referral network.
//!
//! ## Structure
//!
//! * `controllers` - Request handling and business logic
//! * `routes` - API endpoint definitions and routing

pub mod controllers;

pub mod routes;
