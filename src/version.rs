//! Bridge version.

/// The short version information for the bridge.
pub const SHORT_VERSION: &str = env!("CARGO_PKG_VERSION");
