// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistent key/value backend.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::store::Store;

/// A persistent string key/value store, shaped like the Web Storage API.
pub trait KeyValue {
    /// Returns the value for `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str);
}

/// [`Store`] over a [`KeyValue`] backend.
#[derive(Clone, Debug, Default)]
pub struct LocalStore<K> {
    backend: K,
}

impl<K: KeyValue> LocalStore<K> {
    /// Wrap a key/value backend.
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// The wrapped backend, mutably.
    pub fn backend_mut(&mut self) -> &mut K {
        &mut self.backend
    }
}

impl<K: KeyValue> Store for LocalStore<K> {
    fn get(&self, key: &str) -> String {
        self.backend.get_item(key).unwrap_or_default()
    }

    fn set(&mut self, key: &str, value: &str, _cookie_life: u32) {
        self.backend.set_item(key, value);
    }
}

/// In-memory [`KeyValue`] store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValue for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}
