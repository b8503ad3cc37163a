//! Draft transaction lifecycle: creation, preparation, status evaluation and broadcasting.
//!
//! Callers repeatedly [`update`](update_transaction) and
//! [`prepare`](crate::bridge::TezosBridge::prepare_transaction) a draft until it stops changing,
//! then ask for its [status](crate::bridge::TezosBridge::get_transaction_status) to decide whether
//! it may be [signed and broadcast](crate::bridge::TezosBridge::sign_and_broadcast).

mod broadcast;
mod draft;
pub use draft::{create_transaction, update_transaction};
mod max_spendable;
mod prepare;
mod status;
