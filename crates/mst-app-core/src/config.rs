// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service and storage port for MST tools.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Serializes config values as JSON and delegates storage to a `ConfigStore`.
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize the value under `key`. `Ok(None)` if missing or empty.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Like [`ConfigService::load`], falling back to `T::default()` when absent.
    pub fn load_or_default<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.load(key)?.unwrap_or_default())
    }

    /// Serialize and persist the value under `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}

/// In-process `ConfigStore` for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    blobs: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        self.blobs
            .borrow()
            .get(key)
            .cloned()
            .ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    use super::*;
    use crate::prefs::{AlgorithmChoice, SolverPrefs};

    #[test]
    fn missing_key_loads_as_none() {
        let svc = ConfigService::new(MemoryConfigStore::default());
        let loaded: Option<SolverPrefs> = svc.load("solver").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load_round_trips_prefs() {
        let svc = ConfigService::new(MemoryConfigStore::default());
        let prefs = SolverPrefs {
            algorithm: AlgorithmChoice::Prim,
            start_node: 2,
            ..SolverPrefs::default()
        };
        svc.save("solver", &prefs).unwrap();
        assert_eq!(svc.load_or_default::<SolverPrefs>("solver").unwrap(), prefs);
    }

    #[test]
    fn empty_blob_counts_as_missing() {
        let store = MemoryConfigStore::default();
        store.save_raw("solver", b"").unwrap();
        let svc = ConfigService::new(store);
        assert_eq!(
            svc.load_or_default::<SolverPrefs>("solver").unwrap(),
            SolverPrefs::default()
        );
    }

    #[test]
    fn malformed_blob_is_a_serde_error() {
        let store = MemoryConfigStore::default();
        store.save_raw("solver", b"{not json").unwrap();
        let svc = ConfigService::new(store);
        assert!(matches!(
            svc.load::<SolverPrefs>("solver"),
            Err(ConfigError::Serde(_))
        ));
    }
}
