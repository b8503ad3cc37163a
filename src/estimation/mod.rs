//! Estimation of network costs for draft transactions.
//!
//! - `gas`: gas limit and storage limit needed to reach a recipient
//! - `fees`: total network fee of a draft
//!
//! Both estimators are memoized through a [`BridgeCache`](crate::cache::BridgeCache), so repeated
//! preparation of an unchanged draft does not hit the engine again.

mod fees;
pub use fees::FeeCalculator;

mod gas;
pub use gas::GasEstimator;
