//! Serde helpers.

pub mod display;
pub mod duration;
