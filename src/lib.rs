//! # Tezos Bridge
//!
//! Transaction preparation and status evaluation for Tezos accounts.
//!
//! A [`TezosBridge`](bridge::TezosBridge) enriches draft transactions with network parameters and
//! cached gas, storage and fee estimates, and reports whether a draft may be submitted.

pub mod bridge;
pub mod cache;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod estimation;
pub mod serde;
pub mod transactions;
pub mod types;
pub mod version;
