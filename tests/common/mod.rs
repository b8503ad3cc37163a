//! Shared fixtures for the bridge integration tests.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};
use tezos_bridge::{
    bridge::TezosBridge,
    config::CacheConfig,
    engine::{PrefixValidator, TezosEngine},
    error::EngineError,
    types::{
        Account, BroadcastHandle, GasEstimate, NetworkInfo, SubAccount, TezosNetworkInfo,
        Transaction,
    },
};

pub const SENDER: &str = "tz1VSUr8wwNhLAzempoch5d6hLRiTh8Cjcjb";
pub const RECIPIENT: &str = "tz1Ke2h7sDdakHJQh8WX4Z372du1KChsksyU";
pub const CONTRACT: &str = "KT1PWx2mnDueood7fEmfbBDKx1D9BAnnXitn";

/// Fee advertised as network info.
pub const NETWORK_FEE: u64 = 402;

/// A [`TezosEngine`] counting every call, with injectable failures.
#[derive(Debug)]
pub struct MockEngine {
    /// Fee returned by pricing.
    pub fee: Decimal,
    /// Answer network info for another chain family.
    pub foreign_family: AtomicBool,
    pub network_error: Mutex<Option<EngineError>>,
    pub gas_error: Mutex<Option<EngineError>>,
    pub price_error: Mutex<Option<EngineError>>,
    pub broadcast_error: Mutex<Option<EngineError>>,
    pub network_calls: AtomicUsize,
    pub gas_calls: AtomicUsize,
    pub price_calls: AtomicUsize,
    pub broadcast_calls: AtomicUsize,
}

impl MockEngine {
    pub fn new(fee: u64) -> Self {
        Self {
            fee: Decimal::from(fee),
            foreign_family: AtomicBool::new(false),
            network_error: Mutex::new(None),
            gas_error: Mutex::new(None),
            price_error: Mutex::new(None),
            broadcast_error: Mutex::new(None),
            network_calls: AtomicUsize::new(0),
            gas_calls: AtomicUsize::new(0),
            price_calls: AtomicUsize::new(0),
            broadcast_calls: AtomicUsize::new(0),
        }
    }

    pub fn fail_gas(&self, err: EngineError) {
        *self.gas_error.lock().unwrap() = Some(err);
    }

    pub fn fail_price(&self, err: EngineError) {
        *self.price_error.lock().unwrap() = Some(err);
    }

    pub fn fail_broadcast(&self, err: EngineError) {
        *self.broadcast_error.lock().unwrap() = Some(err);
    }

    pub fn network_calls(&self) -> usize {
        self.network_calls.load(Ordering::SeqCst)
    }

    pub fn gas_calls(&self) -> usize {
        self.gas_calls.load(Ordering::SeqCst)
    }

    pub fn price_calls(&self) -> usize {
        self.price_calls.load(Ordering::SeqCst)
    }

    pub fn broadcast_calls(&self) -> usize {
        self.broadcast_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TezosEngine for MockEngine {
    async fn fetch_network_info(&self, _account: &Account) -> Result<NetworkInfo, EngineError> {
        self.network_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.network_error.lock().unwrap().clone() {
            return Err(err);
        }
        if self.foreign_family.load(Ordering::SeqCst) {
            return Ok(NetworkInfo::Foreign("ethereum".into()));
        }
        Ok(TezosNetworkInfo::new(Decimal::from(NETWORK_FEE)).into())
    }

    async fn estimate_gas_and_storage(
        &self,
        _account: &Account,
        address: &str,
    ) -> Result<GasEstimate, EngineError> {
        self.gas_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.gas_error.lock().unwrap().clone() {
            return Err(err);
        }
        if address.starts_with("KT1") {
            return Ok(GasEstimate::new(10_600, 300));
        }
        Ok(GasEstimate::new(1_420, 0))
    }

    async fn price_transaction(
        &self,
        _account: &Account,
        _transaction: &Transaction,
    ) -> Result<Decimal, EngineError> {
        self.price_calls.fetch_add(1, Ordering::SeqCst);
        // leave room for concurrent callers to pile up on the same key
        tokio::time::sleep(Duration::from_millis(20)).await;
        if let Some(err) = self.price_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.fee)
    }

    async fn sign_and_broadcast(
        &self,
        _account: &Account,
        _transaction: &Transaction,
        _device_id: &str,
    ) -> Result<BroadcastHandle, EngineError> {
        self.broadcast_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.broadcast_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(BroadcastHandle { hash: "ooMockOperationHash".into() })
    }
}

/// Creates a bridge over a fresh [`MockEngine`] pricing every transaction at `fee`.
pub fn bridge(fee: u64) -> (TezosBridge, Arc<MockEngine>) {
    let engine = Arc::new(MockEngine::new(fee));
    let bridge =
        TezosBridge::new(engine.clone(), Arc::new(PrefixValidator), &CacheConfig::default());
    (bridge, engine)
}

/// An account holding `balance` mutez and a `token` sub-account holding 42.
pub fn account(balance: u64) -> Account {
    Account {
        id: "js:2:tezos:tz1VSUr8wwNhLAzempoch5d6hLRiTh8Cjcjb".into(),
        currency: "tezos".into(),
        balance: Decimal::from(balance),
        fresh_address: SENDER.into(),
        sub_accounts: vec![SubAccount { id: "token".into(), balance: Decimal::from(42) }],
    }
}
