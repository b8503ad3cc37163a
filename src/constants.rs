//! Bridge constants.

/// Default number of entries kept by each estimation cache.
pub const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default lifetime of a cached estimation, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Fees above `amount / FEE_TOO_HIGH_FACTOR` trigger a warning.
pub const FEE_TOO_HIGH_FACTOR: u32 = 10;

/// Upper bound on preparation rounds used by [`prepare_until_stable`] callers such as the CLI.
///
/// A draft with resolvable inputs converges in two rounds, a sub-account draft in three.
///
/// [`prepare_until_stable`]: crate::bridge::TezosBridge::prepare_until_stable
pub const MAX_PREPARE_ROUNDS: usize = 4;

/// Recipient used to price a draft when estimating the maximum spendable amount and the draft has
/// no recipient yet.
///
/// This is the well-known Tezos burn address.
pub const ESTIMATION_RECIPIENT: &str = "tz1Ke2h7sDdakHJQh8WX4Z372du1KChsksyU";

/// Minimal baker fee in mutez accepted by the default mempool filter.
pub const MINIMAL_FEE_MUTEZ: u64 = 100;

/// Minimal fee per unit of gas, in nanotez.
pub const MINIMAL_NANOTEZ_PER_GAS_UNIT: u64 = 100;

/// Minimal fee per byte of the serialized operation, in nanotez.
pub const MINIMAL_NANOTEZ_PER_BYTE: u64 = 1_000;

/// Approximate serialized size of a single transfer operation in bytes.
pub const TRANSFER_OPERATION_SIZE: u64 = 160;

/// Mutez burnt per byte of storage.
pub const STORAGE_BURN_MUTEZ_PER_BYTE: u64 = 250;

/// Gas limit of a transfer to an implicit account.
pub const IMPLICIT_TRANSFER_GAS_LIMIT: u64 = 1_420;

/// Gas limit of a transfer to an originated contract.
pub const CONTRACT_TRANSFER_GAS_LIMIT: u64 = 10_600;

/// Storage limit of a transfer to an originated contract.
pub const CONTRACT_TRANSFER_STORAGE_LIMIT: u64 = 300;
