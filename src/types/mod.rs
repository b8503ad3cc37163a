//! Shared primitive types.
mod account;
pub use account::*;

mod estimate;
pub use estimate::*;

mod network;
pub use network::*;

mod status;
pub use status::*;

mod transaction;
pub use transaction::*;
