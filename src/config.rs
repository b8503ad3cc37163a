//! Bridge configuration.
use crate::constants::{
    CONTRACT_TRANSFER_GAS_LIMIT, CONTRACT_TRANSFER_STORAGE_LIMIT, DEFAULT_CACHE_CAPACITY,
    DEFAULT_CACHE_TTL_SECS, IMPLICIT_TRANSFER_GAS_LIMIT, STORAGE_BURN_MUTEZ_PER_BYTE,
    TRANSFER_OPERATION_SIZE,
};
use eyre::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use tracing::info;

/// Bridge configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Estimation cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Offline engine configuration.
    #[serde(default)]
    pub offline: OfflineConfig,
}

impl BridgeConfig {
    /// Sets the capacity and lifetime of the gas and storage estimate cache.
    pub fn with_gas_cache(mut self, capacity: u64, ttl: Duration) -> Self {
        self.cache.gas = CacheSettings { capacity, ttl };
        self
    }

    /// Sets the capacity and lifetime of the fee estimate cache.
    pub fn with_fee_cache(mut self, capacity: u64, ttl: Duration) -> Self {
        self.cache.fees = CacheSettings { capacity, ttl };
        self
    }

    /// Sets the default fee advertised by the offline engine.
    pub fn with_default_fee(mut self, fee: Decimal) -> Self {
        self.offline.default_fee = Some(fee);
        self
    }

    /// Load from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .wrap_err_with(|| format!("failed to read config file: {}", path.display()))?;
        let config = serde_yaml::from_reader(&file)
            .wrap_err_with(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save to a YAML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> eyre::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from a YAML file, writing the default configuration there if it does not exist.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> eyre::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load_from_file(path);
        }

        let config = Self::default();
        config
            .save_to_file(path)
            .wrap_err_with(|| format!("failed to write config file: {}", path.display()))?;
        info!(path = %path.display(), "Wrote default configuration");
        Ok(config)
    }
}

/// Estimation cache configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    /// Gas and storage estimate cache.
    #[serde(default)]
    pub gas: CacheSettings,
    /// Fee estimate cache.
    #[serde(default)]
    pub fees: CacheSettings,
}

/// Settings of a single cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSettings {
    /// Maximum number of cached values.
    pub capacity: u64,
    /// How long a cached value is considered fresh.
    #[serde(with = "crate::serde::duration")]
    pub ttl: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

/// Parameters of the [`OfflineEngine`](crate::engine::OfflineEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineConfig {
    /// Default fee in mutez. Defaults to the minimal fee of a transfer to an implicit account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_fee: Option<Decimal>,
    /// Gas limit of a transfer to an implicit account.
    pub implicit_gas_limit: u64,
    /// Gas limit of a transfer to an originated contract.
    pub contract_gas_limit: u64,
    /// Storage limit of a transfer to an originated contract.
    pub contract_storage_limit: u64,
    /// Serialized size of a transfer operation in bytes.
    pub operation_size: u64,
    /// Mutez burnt per byte of storage.
    pub storage_burn_per_byte: u64,
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            default_fee: None,
            implicit_gas_limit: IMPLICIT_TRANSFER_GAS_LIMIT,
            contract_gas_limit: CONTRACT_TRANSFER_GAS_LIMIT,
            contract_storage_limit: CONTRACT_TRANSFER_STORAGE_LIMIT,
            operation_size: TRANSFER_OPERATION_SIZE,
            storage_burn_per_byte: STORAGE_BURN_MUTEZ_PER_BYTE,
        }
    }
}
